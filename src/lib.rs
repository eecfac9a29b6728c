//! Payroll register extraction.
//!
//! This crate reads the text of paginated payroll register PDFs and rebuilds
//! the employee records in them: employee id and name, dated earnings rows,
//! and the stated totals. Results serialize to a `{"employees": [...]}` JSON
//! document.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod report;
pub mod source;
