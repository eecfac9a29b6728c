//! Parsing of payroll register text into employee records.
//!
//! This module contains the [`RecordParser`] state machine and the numeric
//! cleaning applied to every column it reads.

mod numeric;
mod record_parser;

pub use numeric::clean_numeric;
pub use record_parser::{RecordParser, parse, parse_with_layout};
