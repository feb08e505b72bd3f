//! Pet ownership by species: households (millions) and share of U.S. households.

use std::path::Path;

use serde::Serialize;

use crate::data::parse::{parse_magnitude, parse_percent, FieldContext};
use crate::data::table::read_table;
use crate::error::{Result, VizError};

pub const SPECIES_COLUMN: &str = "Species";
pub const HOUSEHOLDS_COLUMN: &str = "Millions_US_Households_Owning";
pub const PERCENT_COLUMN: &str = "Percent_US_Households_Owning";

/// Long survey labels shortened for axis ticks. Unlisted labels are kept as-is.
const SPECIES_LABELS: &[(&str, &str)] =
    &[("Small mammals (gerbils, hamsters, etc.)", "Small mammals")];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesRecord {
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Millions")]
    pub millions: f64,
    #[serde(rename = "Percent")]
    pub percent: f64,
}

pub fn species_label(raw: &str) -> &str {
    SPECIES_LABELS
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}

/// Load and clean the ownership dataset, sorted by household count (largest first).
pub fn load_pet_ownership(path: &Path) -> Result<Vec<SpeciesRecord>> {
    let table = read_table(path)?;
    let species_col = table.column(SPECIES_COLUMN)?;
    let households_col = table.column(HOUSEHOLDS_COLUMN)?;
    let percent_col = table.column(PERCENT_COLUMN)?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let species = table.cell(row, species_col);
        if species.is_empty() {
            continue;
        }
        let ctx = |column| FieldContext {
            dataset: &table.source,
            row: row + 1,
            column,
        };
        records.push(SpeciesRecord {
            species: species_label(species).to_string(),
            millions: parse_magnitude(table.cell(row, households_col), ctx(HOUSEHOLDS_COLUMN))?,
            percent: parse_percent(table.cell(row, percent_col), ctx(PERCENT_COLUMN))?,
        });
    }
    if records.is_empty() {
        return Err(VizError::EmptyDataset {
            dataset: table.source,
        });
    }

    records.sort_by(|a, b| b.millions.total_cmp(&a.millions));
    tracing::info!(source = %table.source, species = records.len(), "pet ownership loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_mammals_label_is_shortened() {
        assert_eq!(species_label("Small mammals (gerbils, hamsters, etc.)"), "Small mammals");
        assert_eq!(species_label("Dog"), "Dog");
    }
}
