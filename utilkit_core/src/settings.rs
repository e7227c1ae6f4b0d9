//! # Engine Settings
//!
//! Tunable constants for the calculators. Every field has a documented
//! default, so an empty JSON object (or no file at all) gives the standard
//! behaviour.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "salary": {
//!     "tax_rate": 0.22,
//!     "days_per_year": 365.0,
//!     "work_hours_per_day": 8.0
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub salary: SalarySettings,
}

/// Constants for the flat-rate salary calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalarySettings {
    /// Flat tax rate applied to gross pay (0.22 = 22%)
    pub tax_rate: f64,
    /// Divisor for daily net pay
    pub days_per_year: f64,
    /// Working hours per day, used for hourly net pay
    pub work_hours_per_day: f64,
}

impl Default for SalarySettings {
    fn default() -> Self {
        SalarySettings {
            tax_rate: 0.22,
            days_per_year: 365.0,
            work_hours_per_day: 8.0,
        }
    }
}

impl SalarySettings {
    pub fn validate(&self) -> CalcResult<()> {
        if !(0.0..1.0).contains(&self.tax_rate) {
            return Err(CalcError::invalid_input(
                "tax_rate",
                self.tax_rate.to_string(),
                "Tax rate must be in [0, 1)",
            ));
        }
        if !(self.days_per_year > 0.0) {
            return Err(CalcError::invalid_input(
                "days_per_year",
                self.days_per_year.to_string(),
                "Days per year must be positive",
            ));
        }
        if !(self.work_hours_per_day > 0.0 && self.work_hours_per_day <= 24.0) {
            return Err(CalcError::invalid_input(
                "work_hours_per_day",
                self.work_hours_per_day.to_string(),
                "Work hours per day must be in (0, 24]",
            ));
        }
        Ok(())
    }
}

impl EngineSettings {
    /// Parse settings from JSON text and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EngineSettings = serde_json::from_str(json).map_err(|e| {
            CalcError::invalid_input("settings", "<json>", format!("Invalid settings JSON: {}", e))
        })?;
        settings.salary.validate()?;
        Ok(settings)
    }
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::invalid_input(
            "settings",
            path.display().to_string(),
            format!("Failed to read settings file: {}", e),
        )
    })?;
    let settings = EngineSettings::from_json(&contents)?;
    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}
