//! Where the searching tables come from.
//!
//! Supported environment variables:
//! - SEARCHRULES_TABLES_PATH: JSON file with table overrides (defaults are used when unset)

use std::path::PathBuf;

use crate::error::TablesError;
use crate::tables::Tables;

pub const TABLES_PATH_ENV: &str = "SEARCHRULES_TABLES_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablesConfig {
    pub tables_path: Option<PathBuf>,
}

impl TablesConfig {
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(TABLES_PATH_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        let tables_path = match value {
            Some(val) if val.trim().is_empty() => {
                tracing::warn!("{} is set but empty, ignoring", TABLES_PATH_ENV);
                None
            }
            Some(val) => Some(PathBuf::from(val.trim())),
            None => None,
        };
        Self { tables_path }
    }

    pub fn load(&self) -> Result<Tables, TablesError> {
        match &self.tables_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading searching tables from file");
                Tables::from_path(path)
            }
            None => {
                tracing::info!("Using default searching tables");
                Ok(Tables::default())
            }
        }
    }
}
