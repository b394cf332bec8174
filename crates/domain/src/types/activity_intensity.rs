//! Activity intensity - how much attention the character's current activity takes.
//!
//! The intensity decides which kinds of search can run alongside the activity:
//! - automatic activity leaves attention for any search
//! - moderate concentration allows quick/thorough search at a malus
//! - full concentration allows only automatic search
//! - trance allows no search at all

use crate::error::ParseCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIntensity {
    /// Walking, eating, chatting - done without thinking about it
    AutomaticActivity,
    /// Needs some attention, e.g. driving a cart or climbing an easy wall
    ActivityWithModerateConcentration,
    /// Needs undivided attention, e.g. spell casting or lock picking
    ActivityWithFullConcentration,
    Trance,
}

impl ActivityIntensity {
    pub fn all() -> [ActivityIntensity; 4] {
        [
            Self::AutomaticActivity,
            Self::ActivityWithModerateConcentration,
            Self::ActivityWithFullConcentration,
            Self::Trance,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutomaticActivity => "automatic_activity",
            Self::ActivityWithModerateConcentration => "activity_with_moderate_concentration",
            Self::ActivityWithFullConcentration => "activity_with_full_concentration",
            Self::Trance => "trance",
        }
    }

    /// Whether any kind of search can be made during this activity.
    pub fn allows_searching(&self) -> bool {
        !matches!(self, Self::Trance)
    }

    /// Whether a deliberate (quick or thorough) search fits alongside this activity.
    pub fn allows_deliberate_search(&self) -> bool {
        matches!(
            self,
            Self::AutomaticActivity | Self::ActivityWithModerateConcentration
        )
    }
}

impl fmt::Display for ActivityIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityIntensity {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|activity| activity.as_str() == normalized)
            .ok_or_else(|| ParseCodeError::new("activity intensity", s))
    }
}
