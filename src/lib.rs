pub mod batch;
pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod generate;
pub mod logging;
pub mod overlay;

pub use error::{Result, VizError};
