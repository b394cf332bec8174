//! Error types for the searching domain
//!
//! Every error here is a contract violation detected at the call boundary.
//! Nothing is retried or replaced with a default; callers branch on the
//! variant (e.g. pick another game action when a search is forbidden).

use thiserror::Error;

use crate::types::ConcealmentSituation;

/// Errors raised by [`crate::SearchEvaluator`] and its inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchingError {
    /// A character in a trance can not initiate any search
    #[error("Can not search when current activity is a trance")]
    InvalidActivityForSearching,

    /// Quick search needs spare attention
    #[error("Can not make quick search when current activity requires full concentration")]
    QuickSearchForbiddenDuringFullConcentration,

    /// Thorough search needs spare attention
    #[error("Can not make thorough search when current activity requires full concentration")]
    ThoroughSearchForbiddenDuringFullConcentration,

    /// Searched area must be finite and non-negative
    #[error("Invalid search area: {0} square meters")]
    InvalidSearchArea(f64),
}

/// Failure to represent a value as an integer without loss.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The value is not a number at all
    #[error("Wrong parameter type: {0}")]
    WrongParameterType(String),

    /// The value is numeric but would change by converting it
    #[error("Value lost on cast to integer: {0}")]
    ValueLostOnCast(String),
}

impl CoercionError {
    pub fn wrong_parameter_type(msg: impl Into<String>) -> Self {
        Self::WrongParameterType(msg.into())
    }

    pub fn value_lost_on_cast(msg: impl Into<String>) -> Self {
        Self::ValueLostOnCast(msg.into())
    }
}

/// Unknown textual code for one of the vocabulary enums
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseCodeError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Failure reported by a lookup table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No concealment value for situation: {0}")]
    UnknownSituation(ConcealmentSituation),
}
