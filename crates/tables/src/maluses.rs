//! Maluses to automatic searching while doing something else.

use searchrules_domain::{ActivityIntensity, MalusesToAutomaticSearching};
use serde::{Deserialize, Serialize};

/// One malus per activity intensity. Missing entries in a table file keep
/// their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalusesToAutomaticSearchingTable {
    pub automatic_activity: i32,
    pub activity_with_moderate_concentration: i32,
    pub activity_with_full_concentration: i32,
    /// Never asked for by the evaluator, kept so the table covers every activity
    pub trance: i32,
}

impl Default for MalusesToAutomaticSearchingTable {
    fn default() -> Self {
        Self {
            automatic_activity: 0,
            activity_with_moderate_concentration: -3,
            activity_with_full_concentration: -6,
            trance: -9,
        }
    }
}

impl MalusesToAutomaticSearching for MalusesToAutomaticSearchingTable {
    fn malus_when_searching_alongside(&self, activity: ActivityIntensity) -> i32 {
        match activity {
            ActivityIntensity::AutomaticActivity => self.automatic_activity,
            ActivityIntensity::ActivityWithModerateConcentration => {
                self.activity_with_moderate_concentration
            }
            ActivityIntensity::ActivityWithFullConcentration => {
                self.activity_with_full_concentration
            }
            ActivityIntensity::Trance => self.trance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maluses_grow_with_concentration() {
        let table = MalusesToAutomaticSearchingTable::default();
        let maluses: Vec<i32> = ActivityIntensity::all()
            .into_iter()
            .map(|activity| table.malus_when_searching_alongside(activity))
            .collect();
        assert_eq!(maluses, vec![0, -3, -6, -9]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table: MalusesToAutomaticSearchingTable =
            serde_json::from_str(r#"{"activity_with_full_concentration": -10}"#).unwrap();
        let full = ActivityIntensity::ActivityWithFullConcentration;
        let moderate = ActivityIntensity::ActivityWithModerateConcentration;
        assert_eq!(table.malus_when_searching_alongside(full), -10);
        assert_eq!(table.malus_when_searching_alongside(moderate), -3);
    }
}
