//! Numeric cleaning for register columns.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Reads a printed number, ignoring currency symbols and separators.
///
/// Every character other than an ASCII digit, `.` or `-` is dropped and the
/// remainder parsed as a decimal. Absent, empty, or unparseable input yields
/// `None`; this never fails.
///
/// # Examples
///
/// ```
/// use payroll_extract::parser::clean_numeric;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clean_numeric(Some("$1,234.56")), Some(Decimal::new(123456, 2)));
/// assert_eq!(clean_numeric(Some("abc")), None);
/// assert_eq!(clean_numeric(None), None);
/// ```
pub fn clean_numeric(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}
