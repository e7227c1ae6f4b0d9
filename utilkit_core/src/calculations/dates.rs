//! # Date Arithmetic
//!
//! D-day countdowns, date differences and exact age. Everything works on
//! calendar dates (`chrono::NaiveDate`) with no time-of-day component, so
//! results cannot drift by a day around midnight or across time zones. The
//! caller decides what "today" is.
//!
//! The week/month/year counts of a difference use fixed divisors (7, 30.44,
//! 365.25). They are approximations, not calendar arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use utilkit_core::calculations::dates::{age, dday};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let birth = NaiveDate::from_ymd_opt(2000, 3, 11).unwrap();
//! assert_eq!(age(birth, today).unwrap().exact_age, 24);
//!
//! let target = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
//! assert_eq!(dday(target, today).days, 10);
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Days per week
const DAYS_PER_WEEK: i64 = 7;

/// Average month length used for approximate month counts
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

/// Average year length used for approximate year counts
pub const AVG_DAYS_PER_YEAR: f64 = 365.25;

/// Countdown to (or time since) a target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdayResult {
    /// `target - today` in days; negative once the target has passed
    pub days: i64,
    pub target_date: NaiveDate,
    pub is_past: bool,
}

impl DdayResult {
    /// Conventional label: "D-10", "D-Day", "D+3"
    pub fn label(&self) -> String {
        match self.days {
            0 => "D-Day".to_string(),
            d if d > 0 => format!("D-{}", d),
            d => format!("D+{}", -d),
        }
    }
}

/// Distance between two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceResult {
    /// Absolute number of days
    pub days: i64,
    pub weeks: i64,
    /// Approximate, `days / 30.44`
    pub months: i64,
    /// Approximate, `days / 365.25`
    pub years: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Next occurrence of a birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextBirthday {
    pub date: NaiveDate,
    /// 0 when the birthday is today
    pub days_left: i64,
}

/// Age derived from a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    /// Completed years
    pub exact_age: i32,
    pub total_days: i64,
    /// Approximate, `total_days / 30.44`
    pub total_months: i64,
    pub birth_date: NaiveDate,
    pub next_birthday: NextBirthday,
}

/// Days until `target` counted from `today`.
pub fn dday(target: NaiveDate, today: NaiveDate) -> DdayResult {
    let days = (target - today).num_days();
    debug!(%target, %today, days, "d-day");
    DdayResult {
        days,
        target_date: target,
        is_past: days < 0,
    }
}

/// Absolute distance between two dates, in either order.
pub fn difference(start: NaiveDate, end: NaiveDate) -> DifferenceResult {
    let days = (end - start).num_days().abs();
    debug!(%start, %end, days, "date difference");
    DifferenceResult {
        days,
        weeks: days / DAYS_PER_WEEK,
        months: approx_count(days, AVG_DAYS_PER_MONTH),
        years: approx_count(days, AVG_DAYS_PER_YEAR),
        start_date: start,
        end_date: end,
    }
}

/// Exact age on `today` for someone born on `birth`.
pub fn age(birth: NaiveDate, today: NaiveDate) -> CalcResult<AgeResult> {
    if birth > today {
        return Err(CalcError::invalid_input(
            "birth_date",
            birth.to_string(),
            "Birth date is in the future",
        ));
    }

    let mut exact_age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        exact_age -= 1;
    }

    let total_days = (today - birth).num_days();
    let next_birthday = next_birthday(birth, today);

    debug!(%birth, %today, exact_age, total_days, "age");

    Ok(AgeResult {
        exact_age,
        total_days,
        total_months: approx_count(total_days, AVG_DAYS_PER_MONTH),
        birth_date: birth,
        next_birthday,
    })
}

/// The first birthday on or after `today`.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NextBirthday {
    let this_year = birthday_in(birth, today.year());
    let date = if this_year < today {
        birthday_in(birth, today.year() + 1)
    } else {
        this_year
    };

    NextBirthday {
        date,
        days_left: (date - today).num_days(),
    }
}

/// Birthday in a given year. Feb 29 falls on Mar 1 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> NaiveDate {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

fn approx_count(days: i64, divisor: f64) -> i64 {
    (days as f64 / divisor).floor() as i64
}

/// Which date calculation to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DateCalculation {
    Dday { target: NaiveDate },
    Difference { start: NaiveDate, end: NaiveDate },
    Age { birth: NaiveDate },
}

/// Result of a [`DateCalculation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DateResult {
    Dday(DdayResult),
    Difference(DifferenceResult),
    Age(AgeResult),
}

/// Run a date calculation relative to `today`.
pub fn calculate(calculation: &DateCalculation, today: NaiveDate) -> CalcResult<DateResult> {
    match *calculation {
        DateCalculation::Dday { target } => Ok(DateResult::Dday(dday(target, today))),
        DateCalculation::Difference { start, end } => {
            Ok(DateResult::Difference(difference(start, end)))
        }
        DateCalculation::Age { birth } => age(birth, today).map(DateResult::Age),
    }
}
