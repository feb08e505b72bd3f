//! The three generation steps. Each loads its dataset, builds its chart and
//! writes one standalone HTML file; nothing is written if any stage fails.

use std::path::PathBuf;

use crate::chart::{bump, choropleth, html, ownership};
use crate::config::{VizConfig, BUMP_OUTPUT, MAP_OUTPUT, OWNERSHIP_OUTPUT};
use crate::data::{load_breed_rankings, load_pet_ownership, load_regions};
use crate::error::Result;
use crate::overlay::{build_overlay, splice_overlay};

pub const MAP_DIV_ID: &str = "devotion-map";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub records: usize,
}

pub fn generate_ownership(config: &VizConfig) -> Result<GenerationReport> {
    let records = load_pet_ownership(&config.ownership_input())?;
    let spec = ownership::build_spec(&records);
    let page = html::vega_page(ownership::OWNERSHIP_TITLE, &spec)?;

    let output = config.output_path(OWNERSHIP_OUTPUT);
    html::write_html(&output, &page)?;
    Ok(GenerationReport {
        output,
        records: records.len(),
    })
}

pub fn generate_map(config: &VizConfig) -> Result<GenerationReport> {
    let regions = load_regions(&config.regions_input())?;
    let figure = choropleth::build_figure(&regions);
    let page = html::plotly_page(MAP_DIV_ID, &figure)?;
    let page = splice_overlay(&page, MAP_DIV_ID, &build_overlay(&regions)?)?;

    let output = config.output_path(MAP_OUTPUT);
    html::write_html(&output, &page)?;
    Ok(GenerationReport {
        output,
        records: regions.len(),
    })
}

pub fn generate_bump(config: &VizConfig) -> Result<GenerationReport> {
    let rows = load_breed_rankings(&config.breeds_input())?;
    let spec = bump::build_spec(&rows);
    let page = html::vega_page(bump::BUMP_TITLE, &spec)?;

    let output = config.output_path(BUMP_OUTPUT);
    html::write_html(&output, &page)?;
    Ok(GenerationReport {
        output,
        records: rows.len(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Ownership,
    Map,
    Bump,
}

impl Step {
    pub fn run(self, config: &VizConfig) -> Result<GenerationReport> {
        match self {
            Self::Ownership => generate_ownership(config),
            Self::Map => generate_map(config),
            Self::Bump => generate_bump(config),
        }
    }

    pub fn number(self) -> usize {
        match self {
            Self::Ownership => 1,
            Self::Map => 2,
            Self::Bump => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ownership => "Pet Ownership Bar Chart",
            Self::Map => "Regional Devotion Map",
            Self::Bump => "Breed Rankings Bump Chart",
        }
    }

    /// Standalone binary that runs only this step.
    pub fn bin_name(self) -> &'static str {
        match self {
            Self::Ownership => "viz1_pet_ownership",
            Self::Map => "viz2_regional_map",
            Self::Bump => "viz3_bump_chart",
        }
    }
}
