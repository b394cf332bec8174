//! Roll on senses value object
//!
//! The dice are rolled elsewhere (or by the players at the table); this only
//! keeps the parts of a finished roll apart so the searching rules can leave
//! out the remarkable sense bonus where it does not apply.

use serde::{Deserialize, Serialize};

use crate::ports::SensoryRoll;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollOnSenses {
    /// Senses property of the character
    pub senses: i32,
    /// Result of the dice
    pub roll: i32,
    /// Bonus from a consciously used remarkable sense, 0 when none is used
    #[serde(default)]
    pub remarkable_sense_bonus: i32,
}

impl RollOnSenses {
    pub fn new(senses: i32, roll: i32) -> Self {
        Self {
            senses,
            roll,
            remarkable_sense_bonus: 0,
        }
    }

    pub fn with_remarkable_sense_bonus(mut self, bonus: i32) -> Self {
        self.remarkable_sense_bonus = bonus;
        self
    }

    pub fn uses_remarkable_sense(&self) -> bool {
        self.remarkable_sense_bonus != 0
    }
}

impl SensoryRoll for RollOnSenses {
    fn value(&self) -> i64 {
        self.value_without_remarkable_sense_bonus() + i64::from(self.remarkable_sense_bonus)
    }

    fn value_without_remarkable_sense_bonus(&self) -> i64 {
        i64::from(self.senses) + i64::from(self.roll)
    }
}
