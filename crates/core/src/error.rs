use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failure while reading one scanner artifact.
/// Callers log these and substitute zero counts; they never abort a run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid count {content:?}: {source}")]
    InvalidCount {
        content: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid riskcode {0:?}")]
    InvalidRiskCode(String),
}

pub type Result<T> = std::result::Result<T, InputError>;
