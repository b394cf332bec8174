//! What the searcher is looking for, relative to items they already know.

use crate::error::ParseCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchItemType {
    /// Plain search without any reference item
    #[default]
    JustSearching,
    /// Looking for an item of the same kind as a known one (e.g. a second key)
    SearchingSameTypeItem,
    /// Looking for an item of a different kind than the known one
    SearchingDifferentTypeItem,
}

impl SearchItemType {
    pub fn all() -> [SearchItemType; 3] {
        [
            Self::JustSearching,
            Self::SearchingSameTypeItem,
            Self::SearchingDifferentTypeItem,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JustSearching => "just_searching",
            Self::SearchingSameTypeItem => "searching_same_type_item",
            Self::SearchingDifferentTypeItem => "searching_different_type_item",
        }
    }

    /// Roll adjustment for a thorough search.
    ///
    /// The rules nominally shrink or grow the trap size here; the trap size is
    /// game-master knowledge we do not have, so the roll is moved instead.
    pub fn thorough_search_adjustment(&self) -> i32 {
        match self {
            Self::JustSearching => 0,
            Self::SearchingSameTypeItem => 3,
            Self::SearchingDifferentTypeItem => -3,
        }
    }
}

impl fmt::Display for SearchItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchItemType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "just_searching" => Ok(Self::JustSearching),
            "searching_same_type_item" => Ok(Self::SearchingSameTypeItem),
            "searching_different_type_item" => Ok(Self::SearchingDifferentTypeItem),
            _ => Err(ParseCodeError::new("search item type", s)),
        }
    }
}
