//! Errors raised while loading lookup tables.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Failed to read tables file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tables JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TablesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
