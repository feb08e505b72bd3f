use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read workbook '{}': {message}", path.display())]
    Workbook { path: PathBuf, message: String },
    #[error("{dataset}: missing column '{column}'")]
    MissingColumn { dataset: String, column: String },
    #[error("{dataset} row {row}: invalid {column} '{value}' ({reason})")]
    InvalidField {
        dataset: String,
        row: usize,
        column: String,
        value: String,
        reason: String,
    },
    #[error("duplicate region identifier '{id}'")]
    DuplicateRegion { id: String },
    #[error("{dataset}: no usable rows")]
    EmptyDataset { dataset: String },
    #[error("chart HTML has no '{anchor}' to splice into")]
    Template { anchor: String },
    #[error("failed to serialize chart payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl VizError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VizError>;
