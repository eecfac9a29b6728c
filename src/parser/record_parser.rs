//! Line-oriented reconstruction of employee records.
//!
//! The parser walks a register one line at a time. A header line opens a new
//! [`EmployeeRecord`]; earnings rows and the totals line that follow are
//! attached to the record opened most recently. Lines of any other shape are
//! skipped.

use regex::Captures;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Layout;
use crate::models::{EarningEntry, EmployeeRecord, ExtractionResult};

use super::numeric::clean_numeric;

/// Builds employee records from register text fed in document order.
///
/// State carries across [`feed_page`](Self::feed_page) calls, so an
/// employee's earnings may continue onto the next page. Use one parser per
/// document, or call [`reset`](Self::reset) before reusing it.
///
/// # Examples
///
/// ```
/// use payroll_extract::parser::RecordParser;
///
/// let mut parser = RecordParser::new();
/// parser.feed_page("1001 – Smith, John\nHourly- 01/02/25 10.00 5.00 50.00");
/// parser.feed_page("Hourly- 01/03/25 10.00 2.00 20.00\nTotal Earnings: 7.00 70.00");
///
/// let result = parser.finish();
/// assert_eq!(result.employees.len(), 1);
/// assert_eq!(result.employees[0].earnings.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    layout: Layout,
    /// The open record is always the last one.
    result: ExtractionResult,
}

impl RecordParser {
    /// Creates a parser for the standard register layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser for a custom layout.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            result: ExtractionResult::default(),
        }
    }

    /// Processes one line of register text.
    ///
    /// The line is trimmed and tested, in order, against the header, the
    /// earnings row and the totals line. A header match opens a new record
    /// and the same line is still tested against the other two shapes, which
    /// then apply to the new record.
    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();

        if let Some(record) = match_header(&self.layout, line) {
            debug!(
                employee_id = %record.employee_id,
                employee_name = %record.employee_name,
                "Opened employee record"
            );
            self.result.employees.push(record);
        }

        let Some(record) = self.result.employees.last_mut() else {
            return;
        };

        if let Some(entry) = match_earning(&self.layout, line) {
            record.earnings.push(entry);
            return;
        }

        if line.contains(self.layout.total_marker()) {
            if let Some((hours, amount)) = match_total(&self.layout, line) {
                record.total_hours = hours;
                record.total_amount = amount;
            }
        }
    }

    /// Processes the text of one page, line by line.
    pub fn feed_page(&mut self, text: &str) {
        for line in text.lines() {
            self.feed_line(line);
        }
    }

    /// Processes a sequence of lines.
    pub fn feed_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref());
        }
    }

    /// Returns the record earnings and totals currently attach to.
    pub fn current_employee(&self) -> Option<&EmployeeRecord> {
        self.result.employees.last()
    }

    /// Returns the records built so far.
    pub fn result(&self) -> &ExtractionResult {
        &self.result
    }

    /// Discards every record, returning the parser to its initial state.
    pub fn reset(&mut self) {
        self.result = ExtractionResult::default();
    }

    /// Consumes the parser, returning the records built.
    pub fn finish(self) -> ExtractionResult {
        self.result
    }
}

/// Parses a complete register with the standard layout.
///
/// # Examples
///
/// ```
/// use payroll_extract::parser::parse;
///
/// let result = parse(["1001 – Smith, John", "Total Earnings: 5.00 50.00"]);
/// assert_eq!(result.employees[0].employee_name, "Smith, John");
/// ```
pub fn parse<I, S>(lines: I) -> ExtractionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_layout(Layout::standard(), lines)
}

/// Parses a complete register with the given layout.
pub fn parse_with_layout<I, S>(layout: Layout, lines: I) -> ExtractionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = RecordParser::with_layout(layout);
    parser.feed_lines(lines);
    parser.finish()
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

fn match_header(layout: &Layout, line: &str) -> Option<EmployeeRecord> {
    let caps = layout.header().captures(line)?;
    Some(EmployeeRecord::new(
        group(&caps, 1)?.trim(),
        group(&caps, 2)?.trim(),
    ))
}

fn match_earning(layout: &Layout, line: &str) -> Option<EarningEntry> {
    let caps = layout.earning().captures(line)?;
    Some(EarningEntry {
        earning_type: group(&caps, 1)?.trim_matches('-').trim().to_string(),
        date: group(&caps, 2)?.to_string(),
        rate: clean_numeric(group(&caps, 3)),
        hours: clean_numeric(group(&caps, 4)),
        amount: clean_numeric(group(&caps, 5)),
    })
}

fn match_total(layout: &Layout, line: &str) -> Option<(Option<Decimal>, Option<Decimal>)> {
    let caps = layout.total().captures(line)?;
    Some((clean_numeric(group(&caps, 1)), clean_numeric(group(&caps, 2))))
}
