//! Standard lookup tables for the searching rules.
//!
//! Implements the `searchrules-domain` table ports with default values and
//! loads overrides from a JSON file named by `SEARCHRULES_TABLES_PATH`.

pub mod config;
pub mod error;
pub mod maluses;
pub mod stealthiness;
pub mod tables;

pub use config::{TablesConfig, TABLES_PATH_ENV};
pub use error::TablesError;
pub use maluses::MalusesToAutomaticSearchingTable;
pub use stealthiness::StealthinessTable;
pub use tables::Tables;
