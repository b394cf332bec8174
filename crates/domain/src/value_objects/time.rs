//! Time spent on a search, in game time units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A combat round lasts six seconds.
pub const ROUNDS_PER_MINUTE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Round,
    Minute,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Round => "round",
            TimeUnit::Minute => "minute",
        }
    }

    fn rounds_in_one(&self) -> f64 {
        match self {
            TimeUnit::Round => 1.0,
            TimeUnit::Minute => ROUNDS_PER_MINUTE,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount of game time in a unit. Fractions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDuration {
    amount: f64,
    unit: TimeUnit,
}

impl TimeDuration {
    pub fn new(amount: f64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    pub fn rounds(amount: f64) -> Self {
        Self::new(amount, TimeUnit::Round)
    }

    pub fn minutes(amount: f64) -> Self {
        Self::new(amount, TimeUnit::Minute)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Same span of time expressed in another unit.
    pub fn convert_to(&self, unit: TimeUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        let rounds = self.amount * self.unit.rounds_in_one();
        Self::new(rounds / unit.rounds_in_one(), unit)
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount == 1.0 {
            write!(f, "1 {}", self.unit)
        } else {
            write!(f, "{} {}s", self.amount, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rounds_and_minutes() {
        assert_eq!(
            TimeDuration::rounds(10.0).convert_to(TimeUnit::Minute),
            TimeDuration::minutes(1.0)
        );
        assert_eq!(
            TimeDuration::minutes(2.5).convert_to(TimeUnit::Round),
            TimeDuration::rounds(25.0)
        );
        assert_eq!(
            TimeDuration::rounds(3.0).convert_to(TimeUnit::Round),
            TimeDuration::rounds(3.0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeDuration::rounds(1.0).to_string(), "1 round");
        assert_eq!(TimeDuration::rounds(0.0).to_string(), "0 rounds");
        assert_eq!(TimeDuration::minutes(47.5).to_string(), "47.5 minutes");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&TimeDuration::minutes(0.5)).unwrap();
        assert_eq!(json, r#"{"amount":0.5,"unit":"minute"}"#);
    }
}
