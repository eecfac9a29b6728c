//! Configuration types for register layouts.
//!
//! This module contains the layout structure deserialized from YAML files.
//! Every field is optional in the file and falls back to the standard
//! register format.

use serde::{Deserialize, Serialize};

/// Employee header: digits, an en-dash or hyphen, then "Surname, Givenname".
///
/// Group 1 is the employee id, group 2 the name.
pub const DEFAULT_HEADER_PATTERN: &str = r"^(\d+)\s*[–-]\s*([A-Za-z]+,\s*[A-Za-z]+)";

/// Earnings row, e.g. `Hourly- 09/10/25 5.00 4.00 100.00`.
///
/// Groups 1-5 are type (with its trailing hyphen), date, rate, hours, amount.
pub const DEFAULT_EARNING_PATTERN: &str =
    r"([A-Za-z]+-)\s+(\d{2}/\d{2}/\d{2})\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)";

/// Literal text that marks a totals line.
pub const DEFAULT_TOTAL_MARKER: &str = "Total Earnings:";

/// Totals line. Group 1 is total hours, group 2 total amount.
pub const DEFAULT_TOTAL_PATTERN: &str = r"Total Earnings:\s+([\d.]+)\s+([\d.]+)";

/// The line patterns of a payroll register.
///
/// # Example
///
/// ```
/// use payroll_extract::config::{DEFAULT_TOTAL_MARKER, LayoutConfig};
///
/// let config: LayoutConfig = serde_yaml::from_str("total_marker: \"Totals:\"").unwrap();
/// assert_eq!(config.total_marker, "Totals:");
/// assert_ne!(config.total_marker, DEFAULT_TOTAL_MARKER);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Regex for the employee header line, matched against the trimmed line.
    pub header_pattern: String,
    /// Regex for an earnings row, searched anywhere in the line.
    pub earning_pattern: String,
    /// Literal substring a totals line must contain.
    pub total_marker: String,
    /// Regex for the totals line.
    pub total_pattern: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_pattern: DEFAULT_HEADER_PATTERN.to_string(),
            earning_pattern: DEFAULT_EARNING_PATTERN.to_string(),
            total_marker: DEFAULT_TOTAL_MARKER.to_string(),
            total_pattern: DEFAULT_TOTAL_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_default_layout() {
        let config: LayoutConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides_only_given_fields() {
        let yaml = r#"
earning_pattern: '(Salary-)\s+(\d{2}/\d{2}/\d{2})\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)'
"#;
        let config: LayoutConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.earning_pattern.starts_with("(Salary-)"));
        assert_eq!(config.header_pattern, DEFAULT_HEADER_PATTERN);
        assert_eq!(config.total_marker, DEFAULT_TOTAL_MARKER);
        assert_eq!(config.total_pattern, DEFAULT_TOTAL_PATTERN);
    }

    #[test]
    fn test_total_pattern_contains_marker() {
        assert!(DEFAULT_TOTAL_PATTERN.starts_with(DEFAULT_TOTAL_MARKER));
    }
}
