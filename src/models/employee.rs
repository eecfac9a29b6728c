//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], one employee block of a payroll
//! register: the header identity, its earnings rows, and the stated totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EarningEntry;

/// An employee block read from a payroll register.
///
/// A new record is opened for every header line, so the same id may appear
/// more than once in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee number as printed (digits only).
    pub employee_id: String,
    /// The employee name in "Surname, Givenname" form.
    pub employee_name: String,
    /// Earnings rows in document order.
    #[serde(default)]
    pub earnings: Vec<EarningEntry>,
    /// Hours stated on the "Total Earnings" line.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_hours: Option<Decimal>,
    /// Amount stated on the "Total Earnings" line.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_amount: Option<Decimal>,
}

impl EmployeeRecord {
    /// Creates a record with no earnings and no totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_extract::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord::new("1001", "Smith, John");
    /// assert_eq!(record.employee_id, "1001");
    /// assert!(record.earnings.is_empty());
    /// assert!(!record.has_totals());
    /// ```
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            earnings: Vec::new(),
            total_hours: None,
            total_amount: None,
        }
    }

    /// Returns true if a "Total Earnings" line was read for this record.
    pub fn has_totals(&self) -> bool {
        self.total_hours.is_some() || self.total_amount.is_some()
    }

    /// Sums the hours of every earnings row that has them.
    pub fn earnings_hours(&self) -> Decimal {
        self.earnings.iter().filter_map(|e| e.hours).sum()
    }

    /// Sums the amounts of every earnings row that has them.
    pub fn earnings_amount(&self) -> Decimal {
        self.earnings.iter().filter_map(|e| e.amount).sum()
    }

    /// Checks the stated totals against the earnings rows.
    ///
    /// Returns `None` when the record has no totals; otherwise whether every
    /// stated total equals the sum of the corresponding column.
    pub fn totals_reconcile(&self) -> Option<bool> {
        if !self.has_totals() {
            return None;
        }

        let hours_ok = self
            .total_hours
            .is_none_or(|total| total == self.earnings_hours());
        let amount_ok = self
            .total_amount
            .is_none_or(|total| total == self.earnings_amount());

        Some(hours_ok && amount_ok)
    }
}
