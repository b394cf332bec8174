//! Concealment values of items hidden in typical situations.

use std::collections::BTreeMap;

use searchrules_domain::{ConcealmentLookup, ConcealmentSituation, LookupError};
use serde::{Deserialize, Serialize};

/// Situation to concealment mapping.
///
/// A table read from a file replaces the defaults as a whole; situations it
/// leaves out answer [`LookupError::UnknownSituation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StealthinessTable {
    values: BTreeMap<ConcealmentSituation, i32>,
}

impl StealthinessTable {
    pub fn new(values: BTreeMap<ConcealmentSituation, i32>) -> Self {
        Self { values }
    }

    pub fn with_value(mut self, situation: ConcealmentSituation, concealment: i32) -> Self {
        self.values.insert(situation, concealment);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for StealthinessTable {
    fn default() -> Self {
        let values = ConcealmentSituation::all()
            .into_iter()
            .map(|situation| (situation, default_concealment(situation)))
            .collect();
        Self { values }
    }
}

fn default_concealment(situation: ConcealmentSituation) -> i32 {
    match situation {
        ConcealmentSituation::LyingFreely => 0,
        ConcealmentSituation::CoveredByOtherItems => 3,
        ConcealmentSituation::Buried => 6,
        ConcealmentSituation::Camouflaged => 9,
        ConcealmentSituation::InHiddenCompartment => 12,
    }
}

impl ConcealmentLookup for StealthinessTable {
    fn concealment_for_situation(
        &self,
        situation: ConcealmentSituation,
    ) -> Result<i32, LookupError> {
        self.values
            .get(&situation)
            .copied()
            .ok_or(LookupError::UnknownSituation(situation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_every_situation() {
        let table = StealthinessTable::default();
        assert_eq!(table.len(), ConcealmentSituation::all().len());
        for situation in ConcealmentSituation::all() {
            assert!(table.concealment_for_situation(situation).is_ok());
        }
        assert_eq!(
            table.concealment_for_situation(ConcealmentSituation::InHiddenCompartment),
            Ok(12)
        );
    }

    #[test]
    fn test_missing_situation_is_an_error() {
        let table = StealthinessTable::new(BTreeMap::new())
            .with_value(ConcealmentSituation::Buried, 7);
        assert_eq!(
            table.concealment_for_situation(ConcealmentSituation::Buried),
            Ok(7)
        );
        assert_eq!(
            table.concealment_for_situation(ConcealmentSituation::Camouflaged),
            Err(LookupError::UnknownSituation(ConcealmentSituation::Camouflaged))
        );
    }

    #[test]
    fn test_json_is_a_plain_map() {
        let table: StealthinessTable =
            serde_json::from_str(r#"{"lying_freely": 1, "buried": 8}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.concealment_for_situation(ConcealmentSituation::LyingFreely),
            Ok(1)
        );
        assert!(serde_json::from_str::<StealthinessTable>(r#"{"in_a_sock": 1}"#).is_err());
    }
}
