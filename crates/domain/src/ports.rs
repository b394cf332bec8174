//! Port traits for the numbers the searching rules consume but do not own.
//!
//! Lookup tables and sensory rolls are passed into the evaluator explicitly;
//! nothing here is fetched from global state.

use crate::error::LookupError;
use crate::types::{ActivityIntensity, ConcealmentSituation};

// =============================================================================
// Lookup Tables
// =============================================================================

/// Malus to automatic searching while another activity runs at the same time.
#[cfg_attr(test, mockall::automock)]
pub trait MalusesToAutomaticSearching: Send + Sync {
    fn malus_when_searching_alongside(&self, activity: ActivityIntensity) -> i32;
}

/// Concealment value of an item hidden in a given situation.
#[cfg_attr(test, mockall::automock)]
pub trait ConcealmentLookup: Send + Sync {
    fn concealment_for_situation(&self, situation: ConcealmentSituation)
        -> Result<i32, LookupError>;
}

// =============================================================================
// Rolls
// =============================================================================

/// A finished roll on senses.
///
/// Values are `i64`: any sum of `i32` parts fits.
#[cfg_attr(test, mockall::automock)]
pub trait SensoryRoll: Send + Sync {
    /// Roll value including the bonus from a used remarkable sense.
    fn value(&self) -> i64;

    /// Roll value as if no remarkable sense was used.
    fn value_without_remarkable_sense_bonus(&self) -> i64;
}
