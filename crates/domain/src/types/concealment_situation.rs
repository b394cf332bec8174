//! Situations describing how an item ended up hidden.
//!
//! Each situation maps to a concealment value through a
//! [`crate::ports::ConcealmentLookup`] table.

use crate::error::ParseCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcealmentSituation {
    /// Lying in the open, only overlooked by chance
    LyingFreely,
    /// Covered by other things (a pile of clothes, leaves)
    CoveredByOtherItems,
    /// Dug into the ground or sunk into mud
    Buried,
    /// Blended into its surroundings on purpose
    Camouflaged,
    /// Inside a secret drawer, a false bottom or a hollow wall
    InHiddenCompartment,
}

impl ConcealmentSituation {
    pub fn all() -> [ConcealmentSituation; 5] {
        [
            Self::LyingFreely,
            Self::CoveredByOtherItems,
            Self::Buried,
            Self::Camouflaged,
            Self::InHiddenCompartment,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LyingFreely => "lying_freely",
            Self::CoveredByOtherItems => "covered_by_other_items",
            Self::Buried => "buried",
            Self::Camouflaged => "camouflaged",
            Self::InHiddenCompartment => "in_hidden_compartment",
        }
    }
}

impl fmt::Display for ConcealmentSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcealmentSituation {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|situation| situation.as_str() == normalized)
            .ok_or_else(|| ParseCodeError::new("concealment situation", s))
    }
}
