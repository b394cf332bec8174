//! Searched area value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SearchingError;

/// Area to search through, in square meters. Finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SquareMeters(f64);

impl SquareMeters {
    pub fn new(value: f64) -> Result<Self, SearchingError> {
        if !value.is_finite() || value < 0.0 {
            return Err(SearchingError::InvalidSearchArea(value));
        }
        // store -0.0 as 0.0
        Ok(Self(value.abs()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for SquareMeters {
    type Error = SearchingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SquareMeters> for f64 {
    fn from(area: SquareMeters) -> Self {
        area.0
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_positive() {
        assert!(SquareMeters::new(0.0).unwrap().is_zero());
        assert_eq!(SquareMeters::new(95.0).unwrap().value(), 95.0);
        assert!(!SquareMeters::new(0.1).unwrap().is_zero());
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert_eq!(
            SquareMeters::new(-1.0),
            Err(SearchingError::InvalidSearchArea(-1.0))
        );
        assert!(SquareMeters::new(f64::INFINITY).is_err());
        assert!(SquareMeters::new(f64::NAN).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let area: SquareMeters = serde_json::from_str("12.5").unwrap();
        assert_eq!(f64::from(area), 12.5);
        assert!(serde_json::from_str::<SquareMeters>("-3").is_err());
    }
}
