//! Calendar-aware age arithmetic.
//!
//! Differences are computed field by field with borrowing. A negative day
//! count borrows the length of the month immediately preceding the target
//! date, so month-length variation and leap years come out right.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Exact age between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    /// Whole years
    pub years: u32,
    /// Remaining whole months (0-11)
    pub months: u32,
    /// Remaining days
    pub days: u32,
    /// Total days between the two dates
    pub total_days: i64,
    /// Days from the target date until the next birthday (0 on the birthday)
    pub days_until_next_birthday: i64,
}

/// Number of days in `month` (1-12) of `year`.
///
/// ```
/// use minitools::services::age::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2023, 2), Some(28));
/// assert_eq!(days_in_month(2023, 13), None);
/// ```
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Computes the age at `target` of someone born on `birth`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use minitools::services::age::calculate_age;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
/// let target = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let age = calculate_age(birth, target).unwrap();
/// assert_eq!((age.years, age.months, age.days), (24, 0, 1));
/// ```
///
/// # Errors
///
/// Returns an error if `birth` is after `target`.
pub fn calculate_age(birth: NaiveDate, target: NaiveDate) -> Result<AgeBreakdown> {
    if birth > target {
        anyhow::bail!("Birth date {birth} is after the target date {target}");
    }

    let mut years = target.year() - birth.year();
    let mut months = i64::from(target.month()) - i64::from(birth.month());
    let mut days = i64::from(target.day()) - i64::from(birth.day());

    // A short preceding month (Jan 31 -> Mar 1) can leave days negative
    // after one borrow; keep walking back a month at a time.
    let (mut borrow_year, mut borrow_month) = (target.year(), target.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        let borrowed = days_in_month(borrow_year, borrow_month)
            .context("Failed to determine length of previous month")?;
        days += i64::from(borrowed);
        months -= 1;
    }

    while months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(AgeBreakdown {
        years: u32::try_from(years).context("Year difference out of range")?,
        months: u32::try_from(months).context("Month difference out of range")?,
        days: u32::try_from(days).context("Day difference out of range")?,
        total_days: target.signed_duration_since(birth).num_days(),
        days_until_next_birthday: days_until_next_birthday(birth, target)?,
    })
}

const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The birthday as observed in `year`; Feb 29 falls on Mar 1 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .context(format!("No birthday date in year {year}"))
}

fn days_until_next_birthday(birth: NaiveDate, target: NaiveDate) -> Result<i64> {
    let mut next = birthday_in(birth, target.year())?;
    if next < target {
        next = birthday_in(birth, target.year() + 1)?;
    }
    Ok(next.signed_duration_since(target).num_days())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .context(format!("Invalid date '{input}'. Expected YYYY-MM-DD"))
}
