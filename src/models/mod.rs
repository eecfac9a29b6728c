//! Core data models for the payroll register extractor.
//!
//! These are the records the parser builds and the shape of the JSON the
//! extractor writes.

mod earning;
mod employee;
mod extraction_result;

pub use earning::{EarningEntry, REGISTER_DATE_FORMAT};
pub use employee::EmployeeRecord;
pub use extraction_result::ExtractionResult;
