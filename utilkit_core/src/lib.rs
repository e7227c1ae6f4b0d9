//! # utilkit_core - Conversion & Calculation Engine
//!
//! `utilkit_core` holds the computational side of Utilkit: unit and base
//! conversion, text codecs, and a handful of everyday calculators. The
//! presentation layer hands in raw strings and gets back either a structured
//! result or a typed error to render.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit time**: Date calculators take "today" as a parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use utilkit_core::{bases, codec, units};
//!
//! assert_eq!(units::convert("length", "m", "cm", 1.0).unwrap(), 100.0);
//! assert_eq!(bases::to_base(255, 16).unwrap(), "FF");
//! assert_eq!(codec::encode(codec::CodecKind::Base64, "A"), "QQ==");
//! ```
//!
//! ## Modules
//!
//! - [`parse`] - Numeric, radix and date parsing
//! - [`units`] - Unit conversion registry
//! - [`bases`] - Numeric base conversion
//! - [`codec`] - Text encoders/decoders
//! - [`calculations`] - BMI, salary and date calculators
//! - [`text`] - Text statistics and transforms
//! - [`color`] - Hex colour to RGB/HSL
//! - [`format`] - Display helpers
//! - [`settings`] - Tunable calculator constants
//! - [`errors`] - Structured error types

pub mod bases;
pub mod calculations;
pub mod codec;
pub mod color;
pub mod errors;
pub mod format;
pub mod parse;
pub mod settings;
pub mod text;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CalculationRequest, CalculationResult};
pub use codec::CodecKind;
pub use errors::{CalcError, CalcResult, ConversionError, DecodeError, EngineError, EngineResult, ParseError};
pub use settings::EngineSettings;
