//! Plotly choropleth of devotion score by state.

use serde::Serialize;
use serde_json::{json, Value};

use crate::chart::html::escape_html;
use crate::data::{RegionRecord, RegionTable};
use crate::overlay::highlight::LineStyle;
use crate::overlay::panel::METRICS;

pub const MAP_TITLE: &str = "Dog Owner Devotion by State";
pub const MAP_WIDTH: u32 = 800;
pub const MAP_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyFigure {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
    #[serde(skip)]
    pub width: u32,
    #[serde(skip)]
    pub height: u32,
}

/// Tooltip lines: state name, then every panel metric in panel format.
pub fn hover_text(region: &RegionRecord) -> String {
    let mut lines = vec![escape_html(&region.name)];
    lines.extend(
        METRICS
            .iter()
            .map(|m| format!("{}: {}", m.label, m.format(m.key.value(region)))),
    );
    lines.join("<br>")
}

pub fn build_figure(regions: &RegionTable) -> PlotlyFigure {
    let records = regions.records();
    let locations: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    let text: Vec<String> = records.iter().map(hover_text).collect();

    let trace = json!({
        "type": "choropleth",
        "locations": locations,
        "z": scores,
        "locationmode": "USA-states",
        "colorscale": "YlOrRd",
        "text": text,
        "hovertemplate": "%{text}<extra></extra>",
        "colorbar": {
            "title": {"text": "Devotion<br>Score", "font": {"size": 12, "weight": "bold"}},
            "tickfont": {"size": 11},
            "thickness": 15,
            "len": 0.5,
            "x": 1.02,
            "xpad": 5
        },
        "marker": {"line": LineStyle::default()}
    });

    let layout = json!({
        "title": {
            "text": MAP_TITLE,
            "x": 0.5,
            "xanchor": "center",
            "font": {"size": 16, "color": "#2c3e50", "weight": "bold"}
        },
        "geo": {
            "scope": "usa",
            "projection": {"type": "albers usa"},
            "showlakes": true,
            "lakecolor": "rgb(255, 255, 255)",
            "bgcolor": "rgba(0,0,0,0)"
        },
        "width": MAP_WIDTH,
        "height": MAP_HEIGHT,
        "margin": {"l": 0, "r": 0, "t": 50, "b": 0},
        "plot_bgcolor": "white",
        "paper_bgcolor": "white"
    });

    let config = json!({
        "responsive": true,
        "displayModeBar": true,
        "displaylogo": false,
        "modeBarButtonsToRemove": ["pan2d", "lasso2d", "select2d"],
        "toImageButtonOptions": {
            "format": "png",
            "filename": "dog_owner_devotion_map",
            "height": 600,
            "width": 900,
            "scale": 1
        }
    });

    PlotlyFigure {
        data: json!([trace]),
        layout,
        config,
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
    }
}
