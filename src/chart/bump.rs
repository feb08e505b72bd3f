//! Vega-Lite bump chart of breed rank by year. Clicking a legend entry
//! highlights that breed and dims the rest.

use std::collections::BTreeSet;

use serde_json::{json, Value};

use crate::data::BreedRank;

pub const BUMP_TITLE: &str = "Dog Breed Popularity Rankings (2015-2024)";
const LEGEND_SELECTION: &str = "legend_breed";

pub const BREED_PALETTE: [&str; 15] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5",
];

/// Alphabetical breed list and a color per breed; the palette repeats past 15 breeds.
pub fn color_scale(rows: &[BreedRank]) -> (Vec<&str>, Vec<&'static str>) {
    let breeds: Vec<&str> = rows
        .iter()
        .map(|r| r.breed.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let colors = (0..breeds.len())
        .map(|i| BREED_PALETTE[i % BREED_PALETTE.len()])
        .collect();
    (breeds, colors)
}

pub fn build_spec(rows: &[BreedRank]) -> Value {
    let (domain, range) = color_scale(rows);
    let scale = json!({"domain": domain, "range": range});
    let rank_scale = json!({"domain": [1, 10], "reverse": true});
    let tooltip = json!([
        {"field": "Year", "type": "ordinal", "title": "Year"},
        {"field": "Breed", "type": "nominal", "title": "Breed"},
        {"field": "Rank", "type": "quantitative", "title": "Rank", "format": "d"}
    ]);

    let lines = json!({
        "mark": {"type": "line", "strokeWidth": 2},
        "params": [{
            "name": LEGEND_SELECTION,
            "select": {"type": "point", "fields": ["Breed"]},
            "bind": "legend"
        }],
        "encoding": {
            "x": {"field": "Year", "type": "ordinal", "title": "Year", "axis": {"labelAngle": 0}},
            "y": {
                "field": "Rank",
                "type": "quantitative",
                "title": "Rank",
                "scale": rank_scale,
                "axis": {"tickCount": 10, "values": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]}
            },
            "color": {
                "field": "Breed",
                "type": "nominal",
                "scale": scale,
                "legend": {
                    "title": "Breed (click to highlight)",
                    "columns": 1,
                    "symbolLimit": 0,
                    "labelLimit": 200
                }
            },
            "opacity": {"condition": {"param": LEGEND_SELECTION, "value": 1.0}, "value": 0.15},
            "strokeWidth": {"condition": {"param": LEGEND_SELECTION, "value": 3}, "value": 1.5},
            "order": {"field": "Year"},
            "tooltip": tooltip
        }
    });

    let points = json!({
        "mark": {"type": "circle", "size": 60},
        "encoding": {
            "x": {"field": "Year", "type": "ordinal"},
            "y": {"field": "Rank", "type": "quantitative", "scale": rank_scale},
            "color": {"field": "Breed", "type": "nominal", "scale": scale, "legend": null},
            "opacity": {"condition": {"param": LEGEND_SELECTION, "value": 1.0}, "value": 0.2},
            "tooltip": tooltip
        }
    });

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": BUMP_TITLE,
        "width": 540,
        "height": 570,
        "data": {"values": rows},
        "layer": [lines, points],
        "config": {
            "axis": {"labelFontSize": 12, "titleFontSize": 14, "titleFontWeight": "bold"},
            "title": {"fontSize": 16, "fontWeight": "bold", "anchor": "start"},
            "legend": {"labelFontSize": 11, "titleFontSize": 12, "titleFontWeight": "bold"}
        }
    })
}
