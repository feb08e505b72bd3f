//! The comparison state owned by the map's click handler. Click, then
//! panel, then highlight, one event at a time. The in-page script follows
//! the same sequence.

use crate::data::RegionTable;
use crate::overlay::highlight::{HighlightSync, LineStyle};
use crate::overlay::panel::{render_panel, PanelView};
use crate::overlay::selection::Selection;

#[derive(Debug, Clone)]
pub struct ComparisonSession<'a> {
    table: &'a RegionTable,
    selection: Selection,
    highlight: HighlightSync,
    chart_line: LineStyle,
}

impl<'a> ComparisonSession<'a> {
    /// `chart_line` is the border style the chart was drawn with.
    pub fn new(table: &'a RegionTable, chart_line: LineStyle) -> Self {
        Self {
            table,
            selection: Selection::new(),
            highlight: HighlightSync::default(),
            chart_line,
        }
    }

    /// Process a click on `id`. Returns false (and changes nothing) for
    /// identifiers outside the region table.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.table.contains(id) {
            tracing::debug!(id, "click on unknown region ignored");
            return false;
        }
        self.selection.toggle(id);
        self.sync_highlight();
        true
    }

    /// Click reported as a Plotly point: `location` when present, otherwise
    /// the region at `point_index` in chart order.
    pub fn click_point(&mut self, location: Option<&str>, point_index: Option<usize>) -> bool {
        let table = self.table;
        let id = location.or_else(|| {
            point_index
                .and_then(|i| table.records().get(i))
                .map(|record| record.id.as_str())
        });
        match id {
            Some(id) => self.click(id),
            None => false,
        }
    }

    /// Close button: clear the selection and restore the original borders.
    pub fn close(&mut self) {
        self.selection.clear();
        self.sync_highlight();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn panel(&self) -> PanelView<'a> {
        render_panel(self.table, &self.selection)
    }

    /// Border style currently applied to the chart.
    pub fn chart_line(&self) -> &LineStyle {
        &self.chart_line
    }

    fn sync_highlight(&mut self) {
        self.chart_line = self
            .highlight
            .apply(&self.chart_line, self.table.ids(), &self.selection);
    }
}
