//! Document-level extraction.
//!
//! [`DataExtractor`] feeds every page of a [`PageSource`] through a fresh
//! [`RecordParser`] in page order and exports the result as JSON.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Layout;
use crate::error::{ExtractError, ExtractResult};
use crate::models::ExtractionResult;
use crate::parser::RecordParser;
use crate::source::PageSource;

/// Extracts employee records from whole documents.
///
/// # Example
///
/// ```
/// use payroll_extract::extractor::DataExtractor;
/// use payroll_extract::source::TextPages;
///
/// let source = TextPages::from_text(
///     "register.txt",
///     "1001 – Smith, John\nHourly- 01/02/25 10.00 5.00 50.00\nTotal Earnings: 5.00 50.00",
/// );
/// let result = DataExtractor::default().extract(&source)?;
/// assert_eq!(result.employees.len(), 1);
/// # Ok::<(), payroll_extract::error::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataExtractor {
    layout: Layout,
}

impl DataExtractor {
    /// Creates an extractor for the given register layout.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Extracts every employee record from a document.
    ///
    /// Pages without text are skipped. A document in which nothing matches
    /// yields an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns the source's error when its pages cannot be read.
    pub fn extract(&self, source: &dyn PageSource) -> ExtractResult<ExtractionResult> {
        let correlation_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            correlation_id = %correlation_id,
            document = %source.name(),
            "Processing extraction request"
        );

        let pages = source.pages().inspect_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to read document pages"
            );
        })?;

        let mut parser = RecordParser::with_layout(self.layout.clone());
        let mut blank_pages = 0;
        for (index, page) in pages.iter().enumerate() {
            match page {
                Some(text) => parser.feed_page(text),
                None => {
                    blank_pages += 1;
                    debug!(correlation_id = %correlation_id, page = index + 1, "Page has no text");
                }
            }
        }
        let result = parser.finish();

        for employee in &result.employees {
            if employee.totals_reconcile() == Some(false) {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %employee.employee_id,
                    earnings_amount = %employee.earnings_amount(),
                    "Stated totals differ from the sum of earnings rows"
                );
            }
        }

        info!(
            correlation_id = %correlation_id,
            pages = pages.len(),
            blank_pages,
            employees = result.employees.len(),
            earnings = result.earnings_count(),
            duration_us = start_time.elapsed().as_micros(),
            "Extraction completed successfully"
        );

        Ok(result)
    }

    /// Serializes a result as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::SerializationError`] if encoding fails.
    pub fn to_json(result: &ExtractionResult) -> ExtractResult<String> {
        serde_json::to_string_pretty(result).map_err(|e| ExtractError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Writes a result as pretty-printed JSON, returning the text written.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::OutputWriteError`] if the file cannot be
    /// written.
    pub fn write_json<P: AsRef<Path>>(
        result: &ExtractionResult,
        path: P,
    ) -> ExtractResult<String> {
        let path = path.as_ref();
        let json = Self::to_json(result)?;

        fs::write(path, &json).map_err(|e| ExtractError::OutputWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), bytes = json.len(), "Wrote JSON output");

        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextPages;

    struct UnreadableSource;

    impl PageSource for UnreadableSource {
        fn name(&self) -> &str {
            "broken.pdf"
        }

        fn pages(&self) -> ExtractResult<Vec<Option<String>>> {
            Err(ExtractError::DocumentUnreadable {
                path: "broken.pdf".to_string(),
                message: "bad xref".to_string(),
            })
        }
    }

    #[test]
    fn test_blank_pages_contribute_nothing() {
        let source = TextPages::new(
            "doc",
            vec![
                Some("1001 – Smith, John".to_string()),
                None,
                Some("Hourly- 01/02/25 10.00 5.00 50.00".to_string()),
            ],
        );

        let result = DataExtractor::default().extract(&source).unwrap();
        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.employees[0].earnings.len(), 1);
    }

    #[test]
    fn test_source_error_is_propagated() {
        let result = DataExtractor::default().extract(&UnreadableSource);
        assert!(matches!(
            result,
            Err(ExtractError::DocumentUnreadable { .. })
        ));
    }

    #[test]
    fn test_each_extraction_starts_fresh() {
        let extractor = DataExtractor::default();
        let source = TextPages::from_text("doc", "1001 – Smith, John");

        let first = extractor.extract(&source).unwrap();
        let second = extractor.extract(&source).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.employees.len(), 1);
    }

    #[test]
    fn test_to_json_shape() {
        let source = TextPages::from_text(
            "doc",
            "1001 – Smith, John\nHourly- 01/02/25 10.00 5.00 50.00",
        );
        let result = DataExtractor::default().extract(&source).unwrap();

        let json = DataExtractor::to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let employee = &value["employees"][0];
        assert_eq!(employee["employee_id"], "1001");
        assert_eq!(employee["earnings"][0]["type"], "Hourly");
        assert_eq!(employee["earnings"][0]["amount"].as_f64().unwrap(), 50.0);
        assert!(employee["total_hours"].is_null());
        assert!(json.contains("\n  \"employees\""));
    }

    #[test]
    fn test_write_json_to_unwritable_path() {
        let result = ExtractionResult::default();
        match DataExtractor::write_json(&result, "/nonexistent/dir/output.json") {
            Err(ExtractError::OutputWriteError { path, .. }) => {
                assert_eq!(path, "/nonexistent/dir/output.json");
            }
            other => panic!("Expected OutputWriteError, got {:?}", other),
        }
    }

    #[test]
    fn test_write_json_round_trips() {
        let source = TextPages::from_text(
            "doc",
            "1001 – Smith, John\nHourly- 01/02/25 10.00 5.00 50.00\nTotal Earnings: 5.00 50.00",
        );
        let result = DataExtractor::default().extract(&source).unwrap();
        let path = std::env::temp_dir().join(format!(
            "payroll_extract_output_{}.json",
            std::process::id()
        ));

        let written = DataExtractor::write_json(&result, &path).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, on_disk);
        let reread: ExtractionResult = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(reread, result);
    }
}
