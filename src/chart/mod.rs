pub mod bump;
pub mod choropleth;
pub mod html;
pub mod ownership;

pub use choropleth::PlotlyFigure;
pub use html::{plotly_page, script_json, vega_page, write_html};
