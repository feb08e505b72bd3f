//! State comparison overlay for the regional map: the selection model, the
//! side panel, the border highlight and the HTML splice that ships the
//! in-page script mirroring them.

pub mod highlight;
pub mod panel;
pub mod selection;
pub mod session;
pub mod splice;

pub use highlight::{HighlightSync, LineStyle, StyleValue};
pub use panel::{render_panel, DiffClass, MetricDifference, MetricKey, MetricSpec, PanelView};
pub use selection::{Selection, SELECTION_CAPACITY};
pub use session::ComparisonSession;
pub use splice::{build_overlay, splice_overlay};
