//! # BMI Calculation
//!
//! Body-mass index from height and weight, with the four standard bands and
//! the weight range that keeps BMI within 18.5 to 24.9.
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::calculations::bmi::{calculate, BmiCategory, BmiInput, UnitSystem};
//!
//! let input = BmiInput {
//!     height: 170.0,
//!     weight: 70.0,
//!     unit_system: UnitSystem::Metric,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.bmi - 24.22).abs() < 0.01);
//! assert_eq!(result.category, BmiCategory::Normal);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult, EngineResult};
use crate::parse::parse_decimal;

/// Meters per inch
const M_PER_INCH: f64 = 0.0254;

/// Kilograms per pound
const KG_PER_LB: f64 = 0.453592;

/// Lower edge of the normal band
pub const NORMAL_MIN: f64 = 18.5;

/// Lower edge of the overweight band
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Lower edge of the obese band
pub const OBESE_MIN: f64 = 30.0;

/// BMI used for the top of the ideal weight range
pub const IDEAL_MAX: f64 = 24.9;

/// Units the height and weight are given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

/// Input parameters for a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// { "height": 170.0, "weight": 70.0, "unit_system": "metric" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Weight in kg (metric) or pounds (imperial)
    pub weight: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BmiInput {
    /// Build an input from raw text fields.
    pub fn parse(height: &str, weight: &str, unit_system: UnitSystem) -> EngineResult<Self> {
        Ok(BmiInput {
            height: parse_decimal(height)?,
            weight: parse_decimal(weight)?,
            unit_system,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        Ok(())
    }

    /// Height converted to meters
    pub fn height_m(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => self.height / 100.0,
            UnitSystem::Imperial => self.height * M_PER_INCH,
        }
    }

    /// Weight converted to kilograms
    pub fn weight_kg(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => self.weight,
            UnitSystem::Imperial => self.weight * KG_PER_LB,
        }
    }
}

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Lower band edges are inclusive.
    pub fn classify(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You may need to gain weight. Consider consulting a doctor.",
            BmiCategory::Normal => "You are maintaining a healthy weight.",
            BmiCategory::Overweight => {
                "Consider losing weight. A balanced diet and exercise will help."
            }
            BmiCategory::Obese => "Weight loss is recommended for your health. Consult a professional.",
        }
    }
}

/// Results from a BMI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Lower end of the ideal weight range (kg), BMI 18.5
    pub ideal_weight_min_kg: f64,
    /// Upper end of the ideal weight range (kg), BMI 24.9
    pub ideal_weight_max_kg: f64,
    /// Position on a 0-100 gauge, 25 points per band
    pub progress: f64,
    pub height_m: f64,
    pub weight_kg: f64,
}

impl BmiResult {
    /// BMI rounded to one decimal, as shown to users
    pub fn bmi_display(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// Gauge position: each band spans 25 points, the obese band saturates at BMI 40.
fn gauge_position(bmi: f64) -> f64 {
    match BmiCategory::classify(bmi) {
        BmiCategory::Underweight => (bmi / NORMAL_MIN) * 25.0,
        BmiCategory::Normal => 25.0 + (bmi - NORMAL_MIN) / (OVERWEIGHT_MIN - NORMAL_MIN) * 25.0,
        BmiCategory::Overweight => 50.0 + (bmi - OVERWEIGHT_MIN) / (OBESE_MIN - OVERWEIGHT_MIN) * 25.0,
        BmiCategory::Obese => 75.0 + ((bmi - OBESE_MIN) / 10.0 * 25.0).min(25.0),
    }
}

/// Calculate BMI.
///
/// # Returns
///
/// * `Ok(BmiResult)` - BMI, band and ideal weight range
/// * `Err(CalcError)` - If height or weight is not positive
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let height_m = input.height_m();
    let weight_kg = input.weight_kg();
    let height_sq = height_m * height_m;
    let bmi = weight_kg / height_sq;
    let category = BmiCategory::classify(bmi);

    debug!(height_m, weight_kg, bmi, ?category, "bmi calculated");

    Ok(BmiResult {
        bmi,
        category,
        ideal_weight_min_kg: NORMAL_MIN * height_sq,
        ideal_weight_max_kg: IDEAL_MAX * height_sq,
        progress: gauge_position(bmi),
        height_m,
        weight_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(height: f64, weight: f64) -> BmiInput {
        BmiInput {
            height,
            weight,
            unit_system: UnitSystem::Metric,
        }
    }

    #[test]
    fn test_metric_example() {
        let result = calculate(&metric(170.0, 70.0)).unwrap();
        // 70 / 1.7^2 = 24.22
        assert!((result.bmi - 24.22).abs() < 0.01);
        assert_eq!(result.bmi_display(), "24.2");
        assert_eq!(result.category, BmiCategory::Normal);
        // 18.5 * 2.89 = 53.465, 24.9 * 2.89 = 71.961
        assert!((result.ideal_weight_min_kg - 53.465).abs() < 1e-9);
        assert!((result.ideal_weight_max_kg - 71.961).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_matches_metric() {
        let imperial = BmiInput {
            height: 70.0,
            weight: 160.0,
            unit_system: UnitSystem::Imperial,
        };
        let result = calculate(&imperial).unwrap();
        assert!((result.height_m - 1.778).abs() < 1e-9);
        assert!((result.weight_kg - 72.57472).abs() < 1e-9);
        // 72.57472 / 1.778^2 = 22.96
        assert!((result.bmi - 22.96).abs() < 0.01);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_gauge_position() {
        assert!((gauge_position(18.5) - 25.0).abs() < 1e-9);
        assert!((gauge_position(25.0) - 50.0).abs() < 1e-9);
        assert!((gauge_position(30.0) - 75.0).abs() < 1e-9);
        assert!((gauge_position(55.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(calculate(&metric(0.0, 70.0)).is_err());
        assert!(calculate(&metric(170.0, 0.0)).is_err());
        assert!(calculate(&metric(-170.0, 70.0)).is_err());
        assert!(calculate(&metric(f64::NAN, 70.0)).is_err());
    }

    #[test]
    fn test_parse_from_text() {
        let input = BmiInput::parse(" 200 ", "100", UnitSystem::Metric).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, BmiCategory::Overweight);

        assert!(BmiInput::parse("", "81", UnitSystem::Metric).is_err());
        assert!(BmiInput::parse("tall", "81", UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_serialization() {
        let input: BmiInput = serde_json::from_str(r#"{"height": 65, "weight": 140}"#).unwrap();
        assert_eq!(input.unit_system, UnitSystem::Metric);
        let result = calculate(&metric(170.0, 70.0)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"category\":\"normal\""));
    }
}
