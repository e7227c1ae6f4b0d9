//! # Salary Calculation
//!
//! Derives net pay from a gross amount using a single flat tax rate. This is
//! a deliberate simplification: there are no brackets, deductions or
//! allowances. Daily and hourly figures divide annual net pay over every day
//! of the year, not just working days.
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::calculations::salary::{calculate, PayPeriod, SalaryInput};
//! use utilkit_core::settings::SalarySettings;
//!
//! let input = SalaryInput { amount: 50_000_000.0, period: PayPeriod::Annual };
//! let result = calculate(&input, &SalarySettings::default()).unwrap();
//! assert!((result.net_annual - 39_000_000.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult, EngineResult};
use crate::format::format_grouped;
use crate::parse::parse_decimal;
use crate::settings::SalarySettings;

/// Months per year used to annualise and de-annualise pay
const MONTHS_PER_YEAR: f64 = 12.0;

/// Period the entered amount covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    #[default]
    Annual,
    Monthly,
}

/// Input parameters for a salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross amount for one `period`
    pub amount: f64,
    #[serde(default)]
    pub period: PayPeriod,
}

impl SalaryInput {
    /// Build an input from a raw amount.
    pub fn parse(amount: &str, period: PayPeriod) -> EngineResult<Self> {
        Ok(SalaryInput {
            amount: parse_decimal(amount)?,
            period,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(CalcError::invalid_input(
                "amount",
                self.amount.to_string(),
                "Salary must be positive",
            ));
        }
        Ok(())
    }

    /// Gross pay normalised to one year
    pub fn gross_annual(&self) -> f64 {
        match self.period {
            PayPeriod::Annual => self.amount,
            PayPeriod::Monthly => self.amount * MONTHS_PER_YEAR,
        }
    }
}

/// Results from a salary calculation. All amounts share the input's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub gross_annual: f64,
    pub net_annual: f64,
    pub gross_monthly: f64,
    pub net_monthly: f64,
    pub net_daily: f64,
    pub net_hourly: f64,
    /// Rate that was applied
    pub tax_rate: f64,
}

impl SalaryResult {
    /// Tax withheld over a year
    pub fn annual_tax(&self) -> f64 {
        self.gross_annual - self.net_annual
    }
}

/// Round to whole currency units and group thousands, e.g. "3,250,000".
pub fn format_currency(amount: f64) -> String {
    format_grouped(amount)
}

/// Calculate net pay.
pub fn calculate(input: &SalaryInput, settings: &SalarySettings) -> CalcResult<SalaryResult> {
    input.validate()?;
    settings.validate()?;

    let gross_annual = input.gross_annual();
    let net_annual = gross_annual * (1.0 - settings.tax_rate);

    debug!(gross_annual, net_annual, tax_rate = settings.tax_rate, "salary calculated");

    Ok(SalaryResult {
        gross_annual,
        net_annual,
        gross_monthly: gross_annual / MONTHS_PER_YEAR,
        net_monthly: net_annual / MONTHS_PER_YEAR,
        net_daily: net_annual / settings.days_per_year,
        net_hourly: net_annual / (settings.days_per_year * settings.work_hours_per_day),
        tax_rate: settings.tax_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_salary() {
        let input = SalaryInput {
            amount: 36_500_000.0,
            period: PayPeriod::Annual,
        };
        let result = calculate(&input, &SalarySettings::default()).unwrap();
        assert_eq!(result.gross_annual, 36_500_000.0);
        assert!((result.net_annual - 28_470_000.0).abs() < 1e-6);
        assert!((result.gross_monthly - 3_041_666.666_666_7).abs() < 1e-3);
        assert!((result.net_monthly - 2_372_500.0).abs() < 1e-6);
        assert!((result.net_daily - 78_000.0).abs() < 1e-6);
        assert!((result.net_hourly - 9_750.0).abs() < 1e-6);
        assert!((result.annual_tax() - 8_030_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_monthly_is_annualised() {
        let input = SalaryInput {
            amount: 3_000_000.0,
            period: PayPeriod::Monthly,
        };
        let result = calculate(&input, &SalarySettings::default()).unwrap();
        assert_eq!(result.gross_annual, 36_000_000.0);
        assert_eq!(result.gross_monthly, 3_000_000.0);
        assert!((result.net_monthly - 2_340_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_rate() {
        let settings = SalarySettings {
            tax_rate: 0.0,
            ..SalarySettings::default()
        };
        let input = SalaryInput {
            amount: 1200.0,
            period: PayPeriod::Monthly,
        };
        let result = calculate(&input, &settings).unwrap();
        assert_eq!(result.net_annual, result.gross_annual);
    }

    #[test]
    fn test_invalid_amount() {
        for amount in [0.0, -100.0, f64::INFINITY] {
            let input = SalaryInput {
                amount,
                period: PayPeriod::Annual,
            };
            assert!(calculate(&input, &SalarySettings::default()).is_err());
        }
        assert!(SalaryInput::parse("abc", PayPeriod::Annual).is_err());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_372_500.4), "2,372,500");
        assert_eq!(format_currency(999.5), "1,000");
    }
}
