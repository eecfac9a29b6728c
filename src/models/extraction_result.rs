//! The root of an extraction's output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// Every employee record found in one document, in document order.
///
/// Serializes to the `{"employees": [...]}` JSON document written by the
/// extractor. An empty list is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Employee records in the order their header lines appeared.
    pub employees: Vec<EmployeeRecord>,
}

impl ExtractionResult {
    /// Returns true if no employee header was found.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Counts the earnings rows across all employees.
    pub fn earnings_count(&self) -> usize {
        self.employees.iter().map(|e| e.earnings.len()).sum()
    }

    /// Returns the earliest and latest earnings dates in the document.
    ///
    /// Rows whose date is not a real calendar date are ignored. Returns
    /// `None` when no row has a usable date.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .employees
            .iter()
            .flat_map(|e| e.earnings.iter())
            .filter_map(|entry| entry.parsed_date());

        let first = dates.next()?;
        Some(dates.fold((first, first), |(start, end), date| {
            (start.min(date), end.max(date))
        }))
    }
}
