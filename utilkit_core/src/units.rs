//! # Unit Conversion Table
//!
//! A process-wide, read-only registry of conversion categories. Linear
//! categories store one factor per unit, relative to the category's base
//! unit (millimetre for length, milligram for weight). Temperature is affine
//! and always pivots through Celsius.
//!
//! ## Categories
//!
//! - **length**: mm, cm, m, km, inch, ft, yard
//! - **weight**: mg, g, kg, lb, oz
//! - **temperature**: celsius, fahrenheit, kelvin
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::units::{convert, format_conversion};
//!
//! let cm = convert("length", "m", "cm", 1.0).unwrap();
//! assert_eq!(cm, 100.0);
//! assert_eq!(format_conversion("length", cm), "100");
//!
//! let f = convert("temperature", "celsius", "fahrenheit", 100.0).unwrap();
//! assert!((f - 212.0).abs() < 1e-9);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::errors::{ConversionError, EngineResult};
use crate::format::format_trimmed;
use crate::parse::parse_decimal;

/// Decimal places shown for linear conversions
pub const LINEAR_DISPLAY_DECIMALS: usize = 6;

/// Decimal places shown for temperature conversions
pub const TEMPERATURE_DISPLAY_DECIMALS: usize = 2;

/// Offset between Celsius and Kelvin
const KELVIN_OFFSET: f64 = 273.15;

/// How values in a category relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// `value * factor(from) / factor(to)`
    Linear,
    /// Affine scales converted through Celsius
    Temperature,
}

/// A unit within a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSpec {
    /// Identifier used in API calls (e.g., "cm")
    pub id: &'static str,
    /// Human-readable name (e.g., "Centimeter")
    pub display_name: &'static str,
    /// Size of one unit in the category's base unit (ignored for temperature)
    pub factor: f64,
}

/// A group of mutually convertible units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionCategory {
    pub id: &'static str,
    pub display_name: &'static str,
    pub kind: CategoryKind,
    /// Units in display order; never empty
    pub units: Vec<UnitSpec>,
}

impl ConversionCategory {
    /// Look up a unit by id.
    pub fn unit(&self, id: &str) -> Result<&UnitSpec, ConversionError> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: self.id.to_string(),
                unit: id.to_string(),
            })
    }

    /// Number of decimals used when displaying results in this category
    pub fn display_decimals(&self) -> usize {
        match self.kind {
            CategoryKind::Linear => LINEAR_DISPLAY_DECIMALS,
            CategoryKind::Temperature => TEMPERATURE_DISPLAY_DECIMALS,
        }
    }
}

const fn unit(id: &'static str, display_name: &'static str, factor: f64) -> UnitSpec {
    UnitSpec {
        id,
        display_name,
        factor,
    }
}

static REGISTRY: Lazy<Vec<ConversionCategory>> = Lazy::new(|| {
    vec![
        ConversionCategory {
            id: "length",
            display_name: "Length",
            kind: CategoryKind::Linear,
            units: vec![
                unit("mm", "Millimeter", 1.0),
                unit("cm", "Centimeter", 10.0),
                unit("m", "Meter", 1_000.0),
                unit("km", "Kilometer", 1_000_000.0),
                unit("inch", "Inch", 25.4),
                unit("ft", "Foot", 304.8),
                unit("yard", "Yard", 914.4),
            ],
        },
        ConversionCategory {
            id: "weight",
            display_name: "Weight",
            kind: CategoryKind::Linear,
            units: vec![
                unit("mg", "Milligram", 1.0),
                unit("g", "Gram", 1_000.0),
                unit("kg", "Kilogram", 1_000_000.0),
                unit("lb", "Pound", 453_592.0),
                unit("oz", "Ounce", 28_349.5),
            ],
        },
        ConversionCategory {
            id: "temperature",
            display_name: "Temperature",
            kind: CategoryKind::Temperature,
            units: vec![
                unit("celsius", "Celsius", 1.0),
                unit("fahrenheit", "Fahrenheit", 1.0),
                unit("kelvin", "Kelvin", 1.0),
            ],
        },
    ]
});

/// All registered categories, in display order.
pub fn categories() -> &'static [ConversionCategory] {
    &REGISTRY
}

/// Look up a category by id.
pub fn category(id: &str) -> Result<&'static ConversionCategory, ConversionError> {
    REGISTRY
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ConversionError::UnknownCategory {
            category: id.to_string(),
        })
}

/// Convert `value` from one unit to another within a category.
pub fn convert(
    category_id: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let cat = category(category_id)?;
    let from = cat.unit(from_unit)?;
    let to = cat.unit(to_unit)?;

    let result = if from.id == to.id {
        value
    } else {
        match cat.kind {
            CategoryKind::Linear => value * from.factor / to.factor,
            CategoryKind::Temperature => from_celsius(to.id, to_celsius(from.id, value)),
        }
    };

    debug!(category = cat.id, from = from.id, to = to.id, value, result, "unit conversion");
    Ok(result)
}

/// Parse `raw` as a decimal number and convert it.
pub fn convert_raw(category_id: &str, from_unit: &str, to_unit: &str, raw: &str) -> EngineResult<f64> {
    let value = parse_decimal(raw)?;
    Ok(convert(category_id, from_unit, to_unit, value)?)
}

/// Format a converted value for display: fixed decimals per category, then
/// trailing fractional zeros stripped. Unknown categories use linear precision.
pub fn format_conversion(category_id: &str, value: f64) -> String {
    let decimals = category(category_id)
        .map(|c| c.display_decimals())
        .unwrap_or(LINEAR_DISPLAY_DECIMALS);
    format_trimmed(value, decimals)
}

fn to_celsius(unit_id: &str, value: f64) -> f64 {
    match unit_id {
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - KELVIN_OFFSET,
        _ => value,
    }
}

fn from_celsius(unit_id: &str, celsius: f64) -> f64 {
    match unit_id {
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + KELVIN_OFFSET,
        _ => celsius,
    }
}
