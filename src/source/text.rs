//! Pre-extracted page text.

use std::fs;
use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

use super::{PageSource, non_blank};

/// Form feed, the page separator in plain-text renderings of a PDF.
pub const PAGE_BREAK: char = '\u{c}';

/// Page text already in memory.
///
/// # Examples
///
/// ```
/// use payroll_extract::source::{PageSource, TextPages};
///
/// let source = TextPages::from_text("memo", "page one\u{c}\u{c}page three");
/// let pages = source.pages().unwrap();
/// assert_eq!(pages.len(), 3);
/// assert!(pages[1].is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextPages {
    name: String,
    pages: Vec<Option<String>>,
}

impl TextPages {
    /// Creates a source from per-page text; `None` marks a page without text.
    pub fn new<I>(name: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            name: name.into(),
            pages: pages.into_iter().collect(),
        }
    }

    /// Splits a text rendering into pages at form feeds.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            pages: text
                .split(PAGE_BREAK)
                .map(|page| non_blank(page.to_string()))
                .collect(),
        }
    }

    /// Reads a text rendering from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::DocumentNotFound`] if the file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        let text = fs::read_to_string(path).map_err(|_| ExtractError::DocumentNotFound {
            path: name.clone(),
        })?;

        Ok(Self::from_text(name, &text))
    }
}

impl PageSource for TextPages {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> ExtractResult<Vec<Option<String>>> {
        Ok(self.pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_on_form_feed() {
        let source = TextPages::from_text("doc", "1001 – Smith, John\u{c}Total Earnings: 1 2");
        let pages = source.pages().unwrap();

        assert_eq!(
            pages,
            vec![
                Some("1001 – Smith, John".to_string()),
                Some("Total Earnings: 1 2".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_pages_become_none() {
        let source = TextPages::from_text("doc", "  \n \u{c}text");
        let pages = source.pages().unwrap();

        assert_eq!(pages[0], None);
        assert_eq!(pages[1].as_deref(), Some("text"));
    }

    #[test]
    fn test_new_keeps_absent_pages() {
        let source = TextPages::new("doc", vec![None, Some("a".to_string())]);
        assert_eq!(source.pages().unwrap().len(), 2);
        assert_eq!(source.name(), "doc");
    }

    #[test]
    fn test_open_missing_file_returns_not_found() {
        assert!(matches!(
            TextPages::open("/nonexistent/register.txt"),
            Err(ExtractError::DocumentNotFound { .. })
        ));
    }
}
