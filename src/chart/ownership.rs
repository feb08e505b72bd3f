//! Vega-Lite bar chart: households per species, shaded by share of households.

use serde_json::{json, Value};

use crate::data::SpeciesRecord;

pub const OWNERSHIP_TITLE: &str = "Pet Ownership in U.S. Households (2024)";

pub fn build_spec(records: &[SpeciesRecord]) -> Value {
    let x = json!({
        "field": "Species",
        "type": "nominal",
        "sort": "-y",
        "title": "Pet Type",
        "axis": {
            "labelAngle": -45,
            "labelAlign": "right",
            "labelFontSize": 12,
            "labelLimit": 150,
            "labelPadding": 5,
            "titleFontSize": 14,
            "titleFontWeight": "bold"
        }
    });
    let y = json!({
        "field": "Millions",
        "type": "quantitative",
        "title": "Millions of U.S. Households",
        "scale": {"domain": [0, 65]}
    });

    let bars = json!({
        "mark": {
            "type": "bar",
            "size": 50,
            "cornerRadiusTopLeft": 3,
            "cornerRadiusTopRight": 3
        },
        "encoding": {
            "x": x,
            "y": y,
            "color": {
                "field": "Percent",
                "type": "quantitative",
                "title": "Percentage (%)",
                "scale": {"domain": [0, 50], "scheme": "blues", "reverse": false},
                "legend": {
                    "title": "Percentage (%)",
                    "format": ".1f",
                    "titleFontSize": 12,
                    "labelFontSize": 11
                }
            },
            "tooltip": [
                {"field": "Species", "type": "nominal", "title": "Pet Type"},
                {
                    "field": "Millions",
                    "type": "quantitative",
                    "title": "Millions of Households",
                    "format": ".1f"
                },
                {"field": "Percent", "type": "quantitative", "title": "Percentage", "format": ".1f"}
            ]
        }
    });

    let labels = json!({
        "mark": {
            "type": "text",
            "align": "center",
            "baseline": "bottom",
            "dy": -5,
            "fontSize": 12,
            "fontWeight": "bold",
            "color": "#2c3e50"
        },
        "encoding": {
            "x": {"field": "Species", "type": "nominal", "sort": "-y"},
            "y": {"field": "Millions", "type": "quantitative"},
            "text": {"field": "Millions", "type": "quantitative", "format": ".1f"}
        }
    });

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": OWNERSHIP_TITLE,
        "width": 600,
        "height": 390,
        "data": {"values": records},
        "layer": [bars, labels],
        "resolve": {"scale": {"color": "independent"}},
        "config": {
            "axis": {"labelFontSize": 12, "titleFontSize": 14, "titleFontWeight": "bold"},
            "title": {"fontSize": 16, "fontWeight": "bold", "anchor": "start"},
            "view": {"strokeWidth": 0, "continuousHeight": 500, "continuousWidth": 650}
        }
    })
}
