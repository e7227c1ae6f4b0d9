//! # Error Types
//!
//! Structured error types for utilkit_core. Every expected failure (blank
//! input, a digit outside its radix, an unknown unit, a broken escape
//! sequence) comes back as one of these values; the engine never panics on
//! user input. The presentation layer decides how to word them.
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::errors::{EngineError, ParseError};
//! use utilkit_core::parse::parse_radix;
//!
//! let err = parse_radix("19", 8).unwrap_err();
//! assert!(matches!(err, ParseError::InvalidDigit { .. }));
//!
//! let wrapped: EngineError = err.into();
//! assert_eq!(wrapped.error_code(), "INVALID_DIGIT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that may fail with any engine error
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for the domain calculators
pub type CalcResult<T> = Result<T, CalcError>;

/// Failure to read a number, digit string, date or colour from raw text.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ParseError {
    /// Input was empty or only whitespace
    #[error("Input is empty")]
    Empty,

    /// Input is not a finite number (or is negative where only naturals are allowed)
    #[error("Not a number: '{input}'")]
    NotANumber { input: String },

    /// A character is outside the alphabet of the requested radix
    #[error("Invalid digit '{digit}' for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Radix outside 2..=36
    #[error("Unsupported base {radix} (expected 2 to 36)")]
    UnsupportedRadix { radix: u32 },

    /// Digit string does not fit in 64 bits
    #[error("Value '{input}' is too large for base {radix}")]
    Overflow { input: String, radix: u32 },

    /// Not an ISO `YYYY-MM-DD` calendar date
    #[error("Invalid date: '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// Not a `#RRGGBB` colour
    #[error("Invalid colour: '{input}' (expected #RRGGBB)")]
    InvalidColor { input: String },
}

impl ParseError {
    pub fn not_a_number(input: impl Into<String>) -> Self {
        ParseError::NotANumber {
            input: input.into(),
        }
    }
}

/// Failure to look up a conversion category or unit.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConversionError {
    /// Unit id not present in the category
    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// Category id not present in the registry
    #[error("Unknown conversion category '{category}'")]
    UnknownCategory { category: String },
}

/// Failure to decode text with one of the codecs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DecodeError {
    /// Input is not valid output of the codec
    #[error("Malformed {codec} input: {reason}")]
    Malformed { codec: String, reason: String },
}

impl DecodeError {
    pub fn malformed(codec: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::Malformed {
            codec: codec.into(),
            reason: reason.into(),
        }
    }
}

/// Validation failure in one of the domain calculators.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range for the calculation
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Umbrella error for callers that chain several engine steps.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "error")]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl EngineError {
    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::Parse(e) => match e {
                ParseError::Empty => "EMPTY_INPUT",
                ParseError::NotANumber { .. } => "NOT_A_NUMBER",
                ParseError::InvalidDigit { .. } => "INVALID_DIGIT",
                ParseError::UnsupportedRadix { .. } => "UNSUPPORTED_RADIX",
                ParseError::Overflow { .. } => "OVERFLOW",
                ParseError::InvalidDate { .. } => "INVALID_DATE",
                ParseError::InvalidColor { .. } => "INVALID_COLOR",
            },
            EngineError::Conversion(e) => match e {
                ConversionError::UnknownUnit { .. } => "UNKNOWN_UNIT",
                ConversionError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            },
            EngineError::Decode(DecodeError::Malformed { .. }) => "MALFORMED",
            EngineError::Calc(CalcError::InvalidInput { .. }) => "INVALID_INPUT",
        }
    }
}
