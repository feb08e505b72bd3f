//! Splices the comparison overlay into the exported map page.

use serde::Serialize;

use crate::chart::html::script_json;
use crate::data::{RegionRecord, RegionTable};
use crate::error::{Result, VizError};
use crate::overlay::highlight::{HighlightSync, LineStyle};
use crate::overlay::panel::{panel_markup, DiffClass, MetricSpec, METRICS, SECOND_PICK_PROMPT};
use crate::overlay::selection::SELECTION_CAPACITY;

const COMPARISON_CSS: &str = include_str!("assets/comparison.css");
const COMPARISON_JS: &str = include_str!("assets/comparison.js");

/// Global the behavior script reads its configuration from.
pub const CONFIG_GLOBAL: &str = "petvizComparison";
pub const CONTAINER_CLASS: &str = "plotly-container";

#[derive(Debug, Serialize)]
struct OverlayClasses {
    active: &'static str,
    selected: &'static str,
    positive: &'static str,
    negative: &'static str,
}

#[derive(Debug, Serialize)]
struct OverlayConfig<'a> {
    regions: &'a [RegionRecord],
    metrics: &'static [MetricSpec],
    capacity: usize,
    prompt: &'static str,
    highlight: &'a LineStyle,
    baseline: LineStyle,
    classes: OverlayClasses,
}

/// Styles, panel skeleton, region payload and behavior script, ready to go before `</body>`.
pub fn build_overlay(regions: &RegionTable) -> Result<String> {
    let highlight = HighlightSync::default();
    let config = OverlayConfig {
        regions: regions.records(),
        metrics: METRICS,
        capacity: SELECTION_CAPACITY,
        prompt: SECOND_PICK_PROMPT,
        highlight: highlight.emphasis(),
        baseline: LineStyle::default(),
        classes: OverlayClasses {
            active: "active",
            selected: "selected",
            positive: DiffClass::Positive.css_class(),
            negative: DiffClass::Negative.css_class(),
        },
    };
    let payload = script_json(&config)?;

    Ok(format!(
        "<style>\n{COMPARISON_CSS}</style>\n{panel}<script>\nwindow.{CONFIG_GLOBAL} = {payload};\n</script>\n<script>\n{COMPARISON_JS}</script>\n",
        panel = panel_markup(),
    ))
}

/// Wrap the graph div in a positioned container and insert `overlay` before
/// the closing body tag. Both anchors must exist.
pub fn splice_overlay(html: &str, graph_div_id: &str, overlay: &str) -> Result<String> {
    let open_tag = format!(r#"<div id="{graph_div_id}""#);
    let div_start = html
        .find(&open_tag)
        .ok_or_else(|| VizError::Template {
            anchor: open_tag.clone(),
        })?;
    let div_end = html[div_start..]
        .find("</div>")
        .map(|offset| div_start + offset + "</div>".len())
        .ok_or_else(|| VizError::Template {
            anchor: "</div>".to_string(),
        })?;
    let body_end = html.rfind("</body>").ok_or_else(|| VizError::Template {
        anchor: "</body>".to_string(),
    })?;
    if body_end < div_end {
        return Err(VizError::Template {
            anchor: "</body>".to_string(),
        });
    }

    let mut out = String::with_capacity(html.len() + overlay.len() + 64);
    out.push_str(&html[..div_start]);
    out.push_str(&format!(r#"<div class="{CONTAINER_CLASS}">"#));
    out.push_str(&html[div_start..div_end]);
    out.push_str("</div>");
    out.push_str(&html[div_end..body_end]);
    out.push_str(overlay);
    out.push_str(&html[body_end..]);
    Ok(out)
}
