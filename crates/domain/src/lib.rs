//! Searching rules for tabletop role-playing games.
//!
//! Given what a character is doing and a finished roll on senses, computes
//! how well (and how long) the character searches, plus how well an item is
//! concealed. Pure and synchronous; tables and rolls come in through the
//! [`ports`] traits.

pub mod error;
pub mod ports;
pub mod searching;
pub mod types;
pub mod value_objects;

pub use error::{CoercionError, LookupError, ParseCodeError, SearchingError};
pub use ports::{ConcealmentLookup, MalusesToAutomaticSearching, SensoryRoll};
pub use searching::{SearchEvaluator, MODERATE_CONCENTRATION_MALUS};
pub use types::{ActivityIntensity, ConcealmentSituation, SearchItemType};
pub use value_objects::{
    ConcealmentValue, RollOnSenses, SquareMeters, TimeDuration, TimeUnit, ToInteger,
    ROUNDS_PER_MINUTE,
};
