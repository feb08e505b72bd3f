//! Comparison side panel: what it shows for a given selection, and the static
//! markup the in-page script fills in.

use std::fmt::Write as _;

use serde::Serialize;

use crate::data::{RegionRecord, RegionTable};
use crate::overlay::selection::Selection;

pub const PANEL_ID: &str = "comparison-panel";
pub const PANEL_TITLE: &str = "State Comparison";
pub const INITIAL_PROMPT: &str = "Click two states on the map to compare them";
pub const SECOND_PICK_PROMPT: &str = "Click another state to compare";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Score,
    Rank,
    Moved,
    Breakup,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Rank => "rank",
            Self::Moved => "moved",
            Self::Breakup => "breakup",
        }
    }

    pub fn value(&self, region: &RegionRecord) -> f64 {
        match self {
            Self::Score => region.score,
            Self::Rank => f64::from(region.rank),
            Self::Moved => region.moved_percent,
            Self::Breakup => region.breakup_percent,
        }
    }
}

/// How one metric is labelled and formatted, in the panel and in map tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSpec {
    pub key: MetricKey,
    /// Field name in the embedded region payload.
    pub field: &'static str,
    pub label: &'static str,
    pub decimals: usize,
    pub prefix: &'static str,
    pub suffix: &'static str,
    /// Label of the difference row; `None` for metrics without one.
    pub diff_label: Option<&'static str>,
}

impl MetricSpec {
    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }

    /// Signed difference text, "+" for zero and above.
    pub fn format_difference(&self, value: f64) -> String {
        let value = if value == 0.0 { 0.0 } else { value };
        let sign = if value >= 0.0 { "+" } else { "" };
        format!("{sign}{:.*}{}", self.decimals, value, self.suffix)
    }
}

/// Rank gets no difference row: a lower rank is the better one, so its sign would read backwards.
pub const METRICS: &[MetricSpec] = &[
    MetricSpec {
        key: MetricKey::Score,
        field: "score",
        label: "Devotion Score",
        decimals: 2,
        prefix: "",
        suffix: "",
        diff_label: Some("Score Difference"),
    },
    MetricSpec {
        key: MetricKey::Rank,
        field: "rank",
        label: "Rank",
        decimals: 0,
        prefix: "#",
        suffix: "",
        diff_label: None,
    },
    MetricSpec {
        key: MetricKey::Moved,
        field: "moved_percent",
        label: "Moved for dog",
        decimals: 1,
        prefix: "",
        suffix: "%",
        diff_label: Some("Moved % Difference"),
    },
    MetricSpec {
        key: MetricKey::Breakup,
        field: "breakup_percent",
        label: "Broke up over dog",
        decimals: 1,
        prefix: "",
        suffix: "%",
        diff_label: Some("Breakup % Difference"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiffClass {
    Positive,
    Negative,
}

impl DiffClass {
    /// Exactly zero counts as positive.
    pub fn of(difference: f64) -> Self {
        if difference >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "diff-positive",
            Self::Negative => "diff-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDifference {
    pub key: MetricKey,
    pub label: &'static str,
    /// First selected minus second selected.
    pub value: f64,
    pub class: DiffClass,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<'a> {
    Hidden,
    Prompt {
        message: &'static str,
    },
    Comparison {
        left: &'a RegionRecord,
        right: &'a RegionRecord,
        differences: Vec<MetricDifference>,
    },
}

impl PanelView<'_> {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn shows_comparison(&self) -> bool {
        matches!(self, Self::Comparison { .. })
    }
}

pub fn differences(left: &RegionRecord, right: &RegionRecord) -> Vec<MetricDifference> {
    METRICS
        .iter()
        .filter_map(|metric| {
            let label = metric.diff_label?;
            let value = metric.key.value(left) - metric.key.value(right);
            Some(MetricDifference {
                key: metric.key,
                label,
                value,
                class: DiffClass::of(value),
                text: metric.format_difference(value),
            })
        })
        .collect()
}

/// Panel state as a function of the selection.
///
/// Every selected identifier must be in `table`; [`ComparisonSession`] only
/// admits clicks on known regions.
///
/// [`ComparisonSession`]: crate::overlay::ComparisonSession
pub fn render_panel<'a>(table: &'a RegionTable, selection: &Selection) -> PanelView<'a> {
    match selection.len() {
        0 => PanelView::Hidden,
        1 => PanelView::Prompt {
            message: SECOND_PICK_PROMPT,
        },
        _ => {
            let Some((a, b)) = selection.pair() else {
                unreachable!("selection never holds more than two regions");
            };
            let lookup = |id: &str| {
                table
                    .get(id)
                    .unwrap_or_else(|| panic!("selected region '{id}' is not in the region table"))
            };
            let (left, right) = (lookup(a), lookup(b));
            PanelView::Comparison {
                left,
                right,
                differences: differences(left, right),
            }
        }
    }
}

/// Static panel skeleton, hidden until the first pick. One box per slot, one
/// row per metric, one difference row per metric that has one.
pub fn panel_markup() -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<div class="comparison-panel" id="{PANEL_ID}">"#);
    html.push_str(
        "    <button class=\"close-btn\" id=\"comparison-close\" type=\"button\" aria-label=\"Close comparison\">&times;</button>\n",
    );
    let _ = writeln!(html, "    <h3>{PANEL_TITLE}</h3>");
    let _ = writeln!(
        html,
        r#"    <div class="comparison-instruction" id="comparison-instruction">{INITIAL_PROMPT}</div>"#
    );
    html.push_str(
        "    <div class=\"state-comparison\" id=\"state-comparison\" style=\"display: none;\">\n",
    );
    for slot in 1..=2 {
        let _ = writeln!(html, r#"        <div class="state-box" id="state{slot}-box">"#);
        let _ = writeln!(
            html,
            r#"            <div class="state-name" id="state{slot}-name">-</div>"#
        );
        for metric in METRICS {
            let _ = writeln!(
                html,
                "            <div class=\"metric-row\"><span class=\"metric-label\">{}:</span><span class=\"metric-value\" id=\"state{slot}-{}\">-</span></div>",
                metric.label,
                metric.key.as_str()
            );
        }
        html.push_str("        </div>\n");
    }
    html.push_str("    </div>\n");
    html.push_str(
        "    <div class=\"comparison-diff\" id=\"comparison-diff\" style=\"display: none;\">\n",
    );
    for metric in METRICS {
        if let Some(label) = metric.diff_label {
            let _ = writeln!(
                html,
                "        <div class=\"diff-row\"><span>{label}:</span><span id=\"diff-{}\">-</span></div>",
                metric.key.as_str()
            );
        }
    }
    html.push_str("    </div>\n</div>\n");
    html
}
