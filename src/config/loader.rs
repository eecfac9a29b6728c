//! Layout loading functionality.
//!
//! This module provides the [`LayoutLoader`] type for loading register
//! layouts from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

use super::types::LayoutConfig;

/// Loads and provides access to a register layout.
///
/// # File Format
///
/// ```text
/// header_pattern: '^(\d+)\s*[–-]\s*([A-Za-z]+,\s*[A-Za-z]+)'
/// earning_pattern: '([A-Za-z]+-)\s+(\d{2}/\d{2}/\d{2})\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)'
/// total_marker: 'Total Earnings:'
/// total_pattern: 'Total Earnings:\s+([\d.]+)\s+([\d.]+)'
/// ```
///
/// Omitted keys keep their standard value.
#[derive(Debug, Clone, Default)]
pub struct LayoutLoader {
    config: LayoutConfig,
}

impl LayoutLoader {
    /// Loads a layout from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `LayoutLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_extract::config::LayoutLoader;
    ///
    /// let loader = LayoutLoader::load("./config/layout.yaml")?;
    /// # Ok::<(), payroll_extract::error::ExtractError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<LayoutConfig>(path)?;

        debug!(path = %path.display(), "Loaded register layout");

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ExtractResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExtractError::LayoutNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ExtractError::LayoutParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Consumes the loader, returning the layout configuration.
    pub fn into_config(self) -> LayoutConfig {
        self.config
    }
}
