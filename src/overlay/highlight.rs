//! Border emphasis for selected regions on the choropleth.

use serde::Serialize;

use crate::overlay::selection::Selection;

pub const BORDER_COLOR: &str = "white";
pub const BORDER_WIDTH: f64 = 1.0;
pub const HIGHLIGHT_COLOR: &str = "#3498db";
pub const HIGHLIGHT_WIDTH: f64 = 3.0;

/// A Plotly style attribute: one value for every region or one per region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue<T> {
    Uniform(T),
    PerRegion(Vec<T>),
}

impl<T: Clone> StyleValue<T> {
    pub fn at(&self, index: usize) -> Option<T> {
        match self {
            Self::Uniform(value) => Some(value.clone()),
            Self::PerRegion(values) => values.get(index).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: StyleValue<String>,
    pub width: StyleValue<f64>,
}

impl LineStyle {
    pub fn uniform(color: &str, width: f64) -> Self {
        Self {
            color: StyleValue::Uniform(color.to_string()),
            width: StyleValue::Uniform(width),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::uniform(BORDER_COLOR, BORDER_WIDTH)
    }
}

/// Rebuilds the full border style arrays on each selection change. The
/// chart's style from before the first change is kept as the baseline for
/// unselected regions.
#[derive(Debug, Clone)]
pub struct HighlightSync {
    emphasis: LineStyle,
    original: Option<LineStyle>,
}

impl Default for HighlightSync {
    fn default() -> Self {
        Self::new(HIGHLIGHT_COLOR, HIGHLIGHT_WIDTH)
    }
}

impl HighlightSync {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            emphasis: LineStyle::uniform(color, width),
            original: None,
        }
    }

    pub fn emphasis(&self) -> &LineStyle {
        &self.emphasis
    }

    pub fn original(&self) -> Option<&LineStyle> {
        self.original.as_ref()
    }

    /// Style arrays for `locations` (chart region order) given the selection.
    /// `current` is what the chart shows right now; it is recorded only on the first call.
    pub fn apply<'a>(
        &mut self,
        current: &LineStyle,
        locations: impl IntoIterator<Item = &'a str>,
        selection: &Selection,
    ) -> LineStyle {
        let original = self.original.get_or_insert_with(|| current.clone());
        let fallback = LineStyle::default();

        let mut colors = Vec::new();
        let mut widths = Vec::new();
        for (i, id) in locations.into_iter().enumerate() {
            let source = if selection.contains(id) {
                &self.emphasis
            } else {
                &*original
            };
            colors.push(
                source
                    .color
                    .at(i)
                    .or_else(|| fallback.color.at(i))
                    .unwrap_or_default(),
            );
            widths.push(source.width.at(i).unwrap_or(BORDER_WIDTH));
        }
        LineStyle {
            color: StyleValue::PerRegion(colors),
            width: StyleValue::PerRegion(widths),
        }
    }
}
