//! Error types for the payroll register extractor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the outer layer can hit: reading the source document,
//! loading a layout, and writing the JSON output. The record parser itself
//! never fails; lines it cannot interpret are skipped.

use thiserror::Error;

/// The main error type for the payroll register extractor.
///
/// # Example
///
/// ```
/// use payroll_extract::error::ExtractError;
///
/// let error = ExtractError::DocumentNotFound {
///     path: "/missing/invoice.pdf".to_string(),
/// };
/// assert_eq!(error.to_string(), "Document not found: /missing/invoice.pdf");
/// ```
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source document does not exist or could not be opened.
    #[error("Document not found: {path}")]
    DocumentNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The source document was found but its text could not be extracted.
    #[error("Failed to read document '{path}': {message}")]
    DocumentUnreadable {
        /// The path of the unreadable document.
        path: String,
        /// A description of the extraction failure.
        message: String,
    },

    /// Layout file was not found at the specified path.
    #[error("Layout file not found: {path}")]
    LayoutNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Layout file could not be parsed.
    #[error("Failed to parse layout file '{path}': {message}")]
    LayoutParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A layout pattern is not a valid regular expression.
    #[error("Invalid pattern '{name}': {message}")]
    InvalidPattern {
        /// The layout field holding the pattern.
        name: String,
        /// The regex compiler's message.
        message: String,
    },

    /// The JSON output could not be written.
    #[error("Failed to write output '{path}': {message}")]
    OutputWriteError {
        /// The output path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The extraction result could not be serialized.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return ExtractError.
pub type ExtractResult<T> = Result<T, ExtractError>;
