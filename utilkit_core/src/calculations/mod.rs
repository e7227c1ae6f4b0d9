//! # Domain Calculators
//!
//! Each calculator follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body-mass index with band and ideal weight range
//! - [`salary`] - Flat-rate net pay from gross annual or monthly pay
//! - [`dates`] - D-day, date difference and exact age

pub mod bmi;
pub mod dates;
pub mod salary;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::EngineSettings;

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiInput, BmiResult, UnitSystem};
pub use dates::{DateCalculation, DateResult};
pub use salary::{PayPeriod, SalaryInput, SalaryResult};

/// Enum wrapper for every calculator input.
///
/// Lets a caller describe any calculation as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    Bmi(BmiInput),
    Salary(SalaryInput),
    Date(DateCalculation),
}

/// Enum wrapper for every calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    Bmi(BmiResult),
    Salary(SalaryResult),
    Date(DateResult),
}

impl CalculationResult {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationResult::Bmi(_) => "Bmi",
            CalculationResult::Salary(_) => "Salary",
            CalculationResult::Date(_) => "Date",
        }
    }
}

/// Run any calculation. `today` anchors the date calculators.
pub fn evaluate(
    request: &CalculationRequest,
    settings: &EngineSettings,
    today: NaiveDate,
) -> CalcResult<CalculationResult> {
    match request {
        CalculationRequest::Bmi(input) => bmi::calculate(input).map(CalculationResult::Bmi),
        CalculationRequest::Salary(input) => {
            salary::calculate(input, &settings.salary).map(CalculationResult::Salary)
        }
        CalculationRequest::Date(calc) => dates::calculate(calc, today).map(CalculationResult::Date),
    }
}
