//! Error type shared by the loader, the scale builder, the controller and the app.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AxisplotError {
    /// A caller handed in something the core cannot work with: an empty dataset,
    /// an unknown dimension key, a dimension wired to the wrong axis.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed dataset content. `line` is 1-based and counts the header.
    #[error("CSV error at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("UI error: {0}")]
    Ui(String),
}

impl AxisplotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AxisplotError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AxisplotError>;
