//! Searching rules - quality and time of automatic, quick and thorough searches.
//!
//! A [`SearchEvaluator`] is bound to what the character is doing right now.
//! The activity decides which searches are possible and what they cost:
//!
//! | activity               | automatic   | quick        | thorough     |
//! |------------------------|-------------|--------------|--------------|
//! | automatic activity     | table malus | no malus     | no malus     |
//! | moderate concentration | table malus | -3           | -3           |
//! | full concentration     | table malus | forbidden    | forbidden    |
//! | trance                 | forbidden   | forbidden    | forbidden    |
//!
//! Automatic and quick searches ignore the remarkable sense bonus, a thorough
//! search uses it.

use crate::error::SearchingError;
use crate::ports::{MalusesToAutomaticSearching, SensoryRoll};
use crate::types::{ActivityIntensity, SearchItemType};
use crate::value_objects::{SquareMeters, TimeDuration};

/// Malus for running two activities with moderate concentration at once.
pub const MODERATE_CONCENTRATION_MALUS: i32 = -3;

/// Square meters covered by a quick search in one round.
const QUICK_SEARCH_SQUARE_METERS_PER_ROUND: f64 = 10.0;

/// Square meters covered by a thorough search in one minute.
const THOROUGH_SEARCH_SQUARE_METERS_PER_MINUTE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEvaluator {
    current_activity: ActivityIntensity,
}

impl SearchEvaluator {
    /// Fails when the character is in a trance.
    pub fn new(current_activity: ActivityIntensity) -> Result<Self, SearchingError> {
        if !current_activity.allows_searching() {
            return Err(SearchingError::InvalidActivityForSearching);
        }
        Ok(Self { current_activity })
    }

    pub fn current_activity(&self) -> ActivityIntensity {
        self.current_activity
    }

    /// Quality of a search running in the background of the current activity.
    ///
    /// Never fails; the result is the plain sum and may be negative.
    pub fn automatic_search_quality(
        &self,
        roll: &dyn SensoryRoll,
        maluses: &dyn MalusesToAutomaticSearching,
    ) -> i64 {
        let quality = roll.value_without_remarkable_sense_bonus()
            + i64::from(maluses.malus_when_searching_alongside(self.current_activity));

        tracing::trace!(
            activity = %self.current_activity,
            quality,
            "Computed automatic search quality"
        );
        quality
    }

    pub fn quick_search_quality(&self, roll: &dyn SensoryRoll) -> Result<i64, SearchingError> {
        if !self.current_activity.allows_deliberate_search() {
            return Err(SearchingError::QuickSearchForbiddenDuringFullConcentration);
        }
        let quality = roll.value_without_remarkable_sense_bonus() + self.concentration_malus();

        tracing::trace!(
            activity = %self.current_activity,
            quality,
            "Computed quick search quality"
        );
        Ok(quality)
    }

    /// Rounds needed to quickly search the area, at least one for any non-empty area.
    pub fn quick_search_time(&self, area: SquareMeters) -> TimeDuration {
        let rounds = area.value() / QUICK_SEARCH_SQUARE_METERS_PER_ROUND;
        let mut amount = rounds.round();
        if amount == 0.0 {
            amount = rounds.ceil();
        }

        tracing::trace!(area = area.value(), rounds = amount, "Computed quick search time");
        TimeDuration::rounds(amount)
    }

    pub fn thorough_search_quality(
        &self,
        roll: &dyn SensoryRoll,
        item_type: SearchItemType,
    ) -> Result<i64, SearchingError> {
        if !self.current_activity.allows_deliberate_search() {
            return Err(SearchingError::ThoroughSearchForbiddenDuringFullConcentration);
        }
        let quality = roll.value()
            + self.concentration_malus()
            + i64::from(item_type.thorough_search_adjustment());

        tracing::trace!(
            activity = %self.current_activity,
            item_type = %item_type,
            quality,
            "Computed thorough search quality"
        );
        Ok(quality)
    }

    /// Minutes needed to thoroughly search the area. Not rounded.
    pub fn thorough_search_time(&self, area: SquareMeters) -> TimeDuration {
        let minutes = if area.is_zero() {
            0.0
        } else {
            area.value() / THOROUGH_SEARCH_SQUARE_METERS_PER_MINUTE
        };

        tracing::trace!(area = area.value(), minutes, "Computed thorough search time");
        TimeDuration::minutes(minutes)
    }

    fn concentration_malus(&self) -> i64 {
        match self.current_activity {
            ActivityIntensity::ActivityWithModerateConcentration => {
                i64::from(MODERATE_CONCENTRATION_MALUS)
            }
            _ => 0,
        }
    }
}
