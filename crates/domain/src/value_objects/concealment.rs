//! Concealment value object - how well an item is hidden.
//!
//! Callers compare it against a search quality; the comparison itself is not
//! part of the searching rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoercionError, LookupError};
use crate::ports::ConcealmentLookup;
use crate::types::ConcealmentSituation;

/// Conversion to `i32` that fails instead of truncating, wrapping or guessing.
pub trait ToInteger {
    fn to_integer(&self) -> Result<i32, CoercionError>;
}

macro_rules! impl_to_integer_lossless {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                fn to_integer(&self) -> Result<i32, CoercionError> {
                    Ok(i32::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_to_integer_range_checked {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                fn to_integer(&self) -> Result<i32, CoercionError> {
                    i32::try_from(*self)
                        .map_err(|_| CoercionError::value_lost_on_cast(self.to_string()))
                }
            }
        )*
    };
}

impl_to_integer_lossless!(i8, i16, i32, u8, u16);
impl_to_integer_range_checked!(i64, i128, isize, u32, u64, u128, usize);

fn float_to_integer(value: f64) -> Result<i32, CoercionError> {
    if !value.is_finite() {
        return Err(CoercionError::wrong_parameter_type(format!(
            "{} is not a finite number",
            value
        )));
    }
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(CoercionError::value_lost_on_cast(value.to_string()));
    }
    Ok(value as i32)
}

impl ToInteger for f64 {
    fn to_integer(&self) -> Result<i32, CoercionError> {
        float_to_integer(*self)
    }
}

impl ToInteger for f32 {
    fn to_integer(&self) -> Result<i32, CoercionError> {
        float_to_integer(f64::from(*self))
    }
}

impl ToInteger for str {
    fn to_integer(&self) -> Result<i32, CoercionError> {
        let trimmed = self.trim();
        if let Ok(whole) = trimmed.parse::<i64>() {
            return whole.to_integer();
        }
        match trimmed.parse::<f64>() {
            Ok(number) => float_to_integer(number),
            Err(_) => Err(CoercionError::wrong_parameter_type(format!(
                "'{}' is not a number",
                self
            ))),
        }
    }
}

impl ToInteger for String {
    fn to_integer(&self) -> Result<i32, CoercionError> {
        self.as_str().to_integer()
    }
}

impl<T: ToInteger + ?Sized> ToInteger for &T {
    fn to_integer(&self) -> Result<i32, CoercionError> {
        (**self).to_integer()
    }
}

/// How hard a hidden item is to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcealmentValue(i32);

impl ConcealmentValue {
    /// Concealment given directly, e.g. decided by the game master.
    pub fn create_custom(value: impl ToInteger) -> Result<Self, CoercionError> {
        Ok(Self(value.to_integer()?))
    }

    /// Concealment of an item hidden in a known situation.
    pub fn create_from_situation(
        situation: ConcealmentSituation,
        lookup: &dyn ConcealmentLookup,
    ) -> Result<Self, LookupError> {
        Ok(Self(lookup.concealment_for_situation(situation)?))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<ConcealmentValue> for i32 {
    fn from(concealment: ConcealmentValue) -> Self {
        concealment.0
    }
}

impl fmt::Display for ConcealmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockConcealmentLookup;
    use mockall::predicate::eq;

    #[test]
    fn test_create_custom() {
        let concealment = ConcealmentValue::create_custom(123).unwrap();
        assert_eq!(concealment.value(), 123);
        assert_eq!(concealment.to_string(), "123");
    }

    #[test]
    fn test_create_custom_accepts_integral_values() {
        assert_eq!(ConcealmentValue::create_custom(12.0).unwrap().value(), 12);
        assert_eq!(ConcealmentValue::create_custom("42").unwrap().value(), 42);
        assert_eq!(ConcealmentValue::create_custom(" -7 ").unwrap().value(), -7);
        assert_eq!(ConcealmentValue::create_custom("5.0").unwrap().value(), 5);
        assert_eq!(ConcealmentValue::create_custom(9_u64).unwrap().value(), 9);
        assert_eq!(
            ConcealmentValue::create_custom(String::from("31")).unwrap().value(),
            31
        );
    }

    #[test]
    fn test_create_custom_rejects_lossy_values() {
        assert!(matches!(
            ConcealmentValue::create_custom(12.5),
            Err(CoercionError::ValueLostOnCast(_))
        ));
        assert!(matches!(
            ConcealmentValue::create_custom(i64::MAX),
            Err(CoercionError::ValueLostOnCast(_))
        ));
        assert!(matches!(
            ConcealmentValue::create_custom("3.3"),
            Err(CoercionError::ValueLostOnCast(_))
        ));
    }

    #[test]
    fn test_create_custom_rejects_non_numbers() {
        assert!(matches!(
            ConcealmentValue::create_custom("abc"),
            Err(CoercionError::WrongParameterType(_))
        ));
        assert!(matches!(
            ConcealmentValue::create_custom(""),
            Err(CoercionError::WrongParameterType(_))
        ));
        assert!(matches!(
            ConcealmentValue::create_custom(f64::NAN),
            Err(CoercionError::WrongParameterType(_))
        ));
    }

    #[test]
    fn test_create_from_situation_delegates_once() {
        let mut lookup = MockConcealmentLookup::new();
        lookup
            .expect_concealment_for_situation()
            .with(eq(ConcealmentSituation::Buried))
            .times(1)
            .returning(|_| Ok(456));

        let concealment =
            ConcealmentValue::create_from_situation(ConcealmentSituation::Buried, &lookup)
                .unwrap();
        assert_eq!(concealment.value(), 456);
        assert_eq!(concealment.to_string(), "456");
    }

    #[test]
    fn test_create_from_situation_propagates_lookup_error() {
        let mut lookup = MockConcealmentLookup::new();
        lookup
            .expect_concealment_for_situation()
            .times(1)
            .returning(|situation| Err(LookupError::UnknownSituation(situation)));

        let err =
            ConcealmentValue::create_from_situation(ConcealmentSituation::Camouflaged, &lookup)
                .unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownSituation(ConcealmentSituation::Camouflaged)
        );
    }

    #[test]
    fn test_both_paths_give_equal_values() {
        let mut lookup = MockConcealmentLookup::new();
        lookup.expect_concealment_for_situation().returning(|_| Ok(6));

        let by_situation =
            ConcealmentValue::create_from_situation(ConcealmentSituation::Buried, &lookup)
                .unwrap();
        assert_eq!(by_situation, ConcealmentValue::create_custom(6).unwrap());
        assert!(by_situation < ConcealmentValue::create_custom(7).unwrap());
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let concealment = ConcealmentValue::create_custom(-4).unwrap();
        assert_eq!(serde_json::to_string(&concealment).unwrap(), "-4");
        let parsed: ConcealmentValue = serde_json::from_str("15").unwrap();
        assert_eq!(i32::from(parsed), 15);
    }
}
