//! Sources of page text.
//!
//! A [`PageSource`] yields the text of a document one page at a time, in
//! page order. [`PdfDocument`] reads PDF files; [`TextPages`] holds text
//! that has already been extracted.

mod pdf;
mod text;

pub use pdf::PdfDocument;
pub use text::{PAGE_BREAK, TextPages};

use std::path::Path;

use crate::error::ExtractResult;

/// A document whose text can be read page by page.
pub trait PageSource {
    /// A label for log messages, usually the file path.
    fn name(&self) -> &str;

    /// Returns the text of every page in page order.
    ///
    /// A page with no text is `None`. Lines within a page keep their order.
    ///
    /// # Errors
    ///
    /// Returns an error when the document as a whole cannot be read.
    fn pages(&self) -> ExtractResult<Vec<Option<String>>>;
}

/// Opens a document, choosing the reader by file extension.
///
/// `.txt` files are read as plain text with form feeds between pages; any
/// other file is read as a PDF.
///
/// # Errors
///
/// Returns [`ExtractError::DocumentNotFound`](crate::error::ExtractError::DocumentNotFound)
/// if the file cannot be read.
pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Box<dyn PageSource>> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_text {
        Ok(Box::new(TextPages::open(path)?))
    } else {
        Ok(Box::new(PdfDocument::open(path)?))
    }
}

/// Maps blank page text to `None`.
pub(crate) fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
