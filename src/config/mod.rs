//! Register layout configuration.
//!
//! A layout names the three line shapes the record parser recognizes: the
//! employee header, the earnings row and the "Total Earnings" line. The
//! built-in layout matches the standard payroll register; a YAML file can
//! override any of the patterns.
//!
//! # Example
//!
//! ```no_run
//! use payroll_extract::config::{Layout, LayoutLoader};
//!
//! let loader = LayoutLoader::load("./config/layout.yaml").unwrap();
//! let layout = Layout::compile(loader.config()).unwrap();
//! assert!(layout.header().is_match("1001 - Smith, John"));
//! ```

mod layout;
mod loader;
mod types;

pub use layout::Layout;
pub use loader::LayoutLoader;
pub use types::{
    DEFAULT_EARNING_PATTERN, DEFAULT_HEADER_PATTERN, DEFAULT_TOTAL_MARKER, DEFAULT_TOTAL_PATTERN,
    LayoutConfig,
};
