//! Earnings line items.
//!
//! This module defines [`EarningEntry`], one dated pay-component row read
//! from a payroll register.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Format of the date column in a register, e.g. `09/10/25`.
pub const REGISTER_DATE_FORMAT: &str = "%m/%d/%y";

/// A single earnings row belonging to an employee.
///
/// Numeric columns are independently optional: a column whose text could not
/// be read as a number is kept as `None` rather than rejecting the row.
///
/// # Example
///
/// ```
/// use payroll_extract::models::EarningEntry;
/// use rust_decimal::Decimal;
///
/// let entry = EarningEntry {
///     earning_type: "Hourly".to_string(),
///     date: "01/02/25".to_string(),
///     rate: Some(Decimal::new(1000, 2)),
///     hours: Some(Decimal::new(500, 2)),
///     amount: Some(Decimal::new(5000, 2)),
/// };
/// assert!(entry.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningEntry {
    /// The pay component, e.g. "Hourly".
    #[serde(rename = "type")]
    pub earning_type: String,
    /// The change date exactly as printed (MM/DD/YY).
    pub date: String,
    /// The hourly rate.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rate: Option<Decimal>,
    /// The hours worked.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub hours: Option<Decimal>,
    /// The amount paid.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
}

impl EarningEntry {
    /// Interprets the printed date as a calendar date.
    ///
    /// Returns `None` when the text is not a real date (e.g. `13/45/25`).
    /// The stored string is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_extract::models::EarningEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = EarningEntry {
    ///     earning_type: "Hourly".to_string(),
    ///     date: "09/10/25".to_string(),
    ///     rate: None,
    ///     hours: None,
    ///     amount: None,
    /// };
    /// assert_eq!(entry.parsed_date(), NaiveDate::from_ymd_opt(2025, 9, 10));
    /// ```
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, REGISTER_DATE_FORMAT).ok()
    }

    /// Returns true if rate, hours and amount were all read.
    pub fn is_complete(&self) -> bool {
        self.rate.is_some() && self.hours.is_some() && self.amount.is_some()
    }
}
