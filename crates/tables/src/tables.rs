//! Bundle of every lookup table the searching rules consult.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TablesError;
use crate::maluses::MalusesToAutomaticSearchingTable;
use crate::stealthiness::StealthinessTable;

/// All searching tables. Sections missing from a table file keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub maluses_to_automatic_searching: MalusesToAutomaticSearchingTable,
    pub stealthiness: StealthinessTable,
}

impl Tables {
    pub fn from_json_str(json: &str) -> Result<Self, TablesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TablesError::io(path, e))?;
        let tables = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            stealthiness_entries = tables.stealthiness.len(),
            "Loaded searching tables"
        );
        Ok(tables)
    }

    pub fn to_json_pretty(&self) -> Result<String, TablesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
