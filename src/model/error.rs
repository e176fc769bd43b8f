use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("match model not found at path: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read match model {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode match model {path}: {source}")]
    Undecodable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("incompatible match model: {reason}")]
    Incompatible { reason: String },

    #[error("match model prediction failed: {reason}")]
    Prediction { reason: String },
}
