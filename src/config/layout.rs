//! Compiled register layouts.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, ExtractResult};

use super::types::LayoutConfig;

static STANDARD_LAYOUT: LazyLock<Layout> = LazyLock::new(|| {
    Layout::compile(&LayoutConfig::default()).expect("standard layout patterns are valid")
});

/// A [`LayoutConfig`] with its patterns compiled.
///
/// Cloning is cheap; compiled regexes are shared.
#[derive(Debug, Clone)]
pub struct Layout {
    header: Regex,
    earning: Regex,
    total_marker: String,
    total: Regex,
}

impl Layout {
    /// Compiles every pattern of a layout configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidPattern`] naming the first field whose
    /// pattern does not compile, or whose pattern has fewer capture groups
    /// than the parser reads from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_extract::config::{Layout, LayoutConfig};
    ///
    /// let config = LayoutConfig {
    ///     header_pattern: "(unclosed".to_string(),
    ///     ..LayoutConfig::default()
    /// };
    /// assert!(Layout::compile(&config).is_err());
    /// ```
    pub fn compile(config: &LayoutConfig) -> ExtractResult<Self> {
        Ok(Self {
            header: compile_pattern("header_pattern", &config.header_pattern, 2)?,
            earning: compile_pattern("earning_pattern", &config.earning_pattern, 5)?,
            total_marker: config.total_marker.clone(),
            total: compile_pattern("total_pattern", &config.total_pattern, 2)?,
        })
    }

    /// Returns the layout of the standard payroll register.
    pub fn standard() -> Self {
        STANDARD_LAYOUT.clone()
    }

    /// The employee header regex.
    pub fn header(&self) -> &Regex {
        &self.header
    }

    /// The earnings row regex.
    pub fn earning(&self) -> &Regex {
        &self.earning
    }

    /// The literal marker of a totals line.
    pub fn total_marker(&self) -> &str {
        &self.total_marker
    }

    /// The totals line regex.
    pub fn total(&self) -> &Regex {
        &self.total
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

fn compile_pattern(name: &str, pattern: &str, groups: usize) -> ExtractResult<Regex> {
    let regex = Regex::new(pattern).map_err(|e| ExtractError::InvalidPattern {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    if regex.captures_len() <= groups {
        return Err(ExtractError::InvalidPattern {
            name: name.to_string(),
            message: format!(
                "expected at least {} capture groups, found {}",
                groups,
                regex.captures_len() - 1
            ),
        });
    }

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_header_accepts_en_dash_and_hyphen() {
        let layout = Layout::standard();

        assert!(layout.header().is_match("1001 – Smith, John"));
        assert!(layout.header().is_match("1001-Smith,John"));
        assert!(!layout.header().is_match("Employee 1001 - Smith, John"));
    }

    #[test]
    fn test_standard_earning_matches_mid_line() {
        let layout = Layout::standard();
        let caps = layout
            .earning()
            .captures("Regular Hourly- 09/10/25 5.00 4.00 100.00 YTD")
            .unwrap();

        assert_eq!(&caps[1], "Hourly-");
        assert_eq!(&caps[2], "09/10/25");
        assert_eq!(&caps[5], "100.00");
    }

    #[test]
    fn test_invalid_regex_names_field() {
        let config = LayoutConfig {
            total_pattern: "Total Earnings:(".to_string(),
            ..LayoutConfig::default()
        };

        match Layout::compile(&config) {
            Err(ExtractError::InvalidPattern { name, .. }) => assert_eq!(name, "total_pattern"),
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_groups_rejected() {
        let config = LayoutConfig {
            earning_pattern: r"(Hourly-)\s+(\d{2}/\d{2}/\d{2})".to_string(),
            ..LayoutConfig::default()
        };

        match Layout::compile(&config) {
            Err(ExtractError::InvalidPattern { name, message }) => {
                assert_eq!(name, "earning_pattern");
                assert!(message.contains("found 2"));
            }
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_marker_kept() {
        let config = LayoutConfig {
            total_marker: "Grand Total:".to_string(),
            total_pattern: r"Grand Total:\s+([\d.]+)\s+([\d.]+)".to_string(),
            ..LayoutConfig::default()
        };

        let layout = Layout::compile(&config).unwrap();
        assert_eq!(layout.total_marker(), "Grand Total:");
    }
}
