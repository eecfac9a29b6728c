//! PDF page text via [`pdf_extract`].
//!
//! `pdf_extract` can panic on malformed input rather than returning an
//! error, so extraction runs inside [`std::panic::catch_unwind`] and a panic
//! is reported as [`ExtractError::DocumentUnreadable`].

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

use super::{PageSource, non_blank};

/// A PDF document held in memory.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    name: String,
    bytes: Vec<u8>,
}

impl PdfDocument {
    /// Reads a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::DocumentNotFound`] if the file cannot be read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_extract::source::{PageSource, PdfDocument};
    ///
    /// let document = PdfDocument::open("invoice.pdf")?;
    /// let pages = document.pages()?;
    /// # Ok::<(), payroll_extract::error::ExtractError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        let bytes = fs::read(path).map_err(|_| ExtractError::DocumentNotFound {
            path: name.clone(),
        })?;

        debug!(path = %name, bytes = bytes.len(), "Read PDF document");

        Ok(Self { name, bytes })
    }

    /// Wraps PDF bytes that were obtained elsewhere.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl PageSource for PdfDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> ExtractResult<Vec<Option<String>>> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&self.bytes)
        }));

        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                return Err(ExtractError::DocumentUnreadable {
                    path: self.name.clone(),
                    message: e.to_string(),
                });
            }
            Err(_) => {
                return Err(ExtractError::DocumentUnreadable {
                    path: self.name.clone(),
                    message: "PDF extraction panicked (malformed document)".to_string(),
                });
            }
        };

        debug!(path = %self.name, pages = pages.len(), "Extracted PDF page text");

        Ok(pages.into_iter().map(non_blank).collect())
    }
}
