//! Console table rendering of extraction results.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::models::{EarningEntry, ExtractionResult, REGISTER_DATE_FORMAT};

/// Width of the table rules.
pub const TABLE_WIDTH: usize = 120;

/// Renders a result as a fixed-width table for the terminal.
///
/// Each employee's first earnings row shares the line with the employee's id
/// and name; later rows are indented beneath it. A totals line follows when
/// the register stated a total amount. Missing numbers print as `-`.
///
/// # Examples
///
/// ```
/// use payroll_extract::parser::parse;
/// use payroll_extract::report::render_table;
///
/// let result = parse(["1001 – Smith, John", "Hourly- 01/02/25 10.00 5.00 50.00"]);
/// let table = render_table(&result);
/// assert!(table.contains("Total Employees Found: 1"));
/// assert!(table.contains("1001 – Smith, John"));
/// ```
pub fn render_table(result: &ExtractionResult) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(TABLE_WIDTH);
    let light = "-".repeat(TABLE_WIDTH);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\nTotal Employees Found: {}", result.employees.len());
    if let Some((start, end)) = result.period() {
        let _ = writeln!(
            out,
            "Period: {} to {}",
            start.format(REGISTER_DATE_FORMAT),
            end.format(REGISTER_DATE_FORMAT)
        );
    }
    let _ = writeln!(out, "\n{heavy}");
    let _ = writeln!(out, "{:<35} {:<60}", "Employee ID & Name", "Earnings");
    let _ = writeln!(
        out,
        "{:<35} {:<15}{:<15} {:<10} {:<10} {:<15}",
        "", "Type", "Change Date", "Rate", "Hours", "Amount"
    );
    let _ = writeln!(out, "{heavy}");

    for employee in &result.employees {
        let info = format!("{} – {}", employee.employee_id, employee.employee_name);

        let mut earnings = employee.earnings.iter();
        if let Some(first) = earnings.next() {
            let _ = writeln!(out, "{:<35} {}", info, earning_columns(first));
            for entry in earnings {
                let _ = writeln!(out, "{:<35} {}", "", earning_columns(entry));
            }
        }
        out.push_str("\n\n");

        if employee.total_amount.is_some() {
            let _ = writeln!(
                out,
                "{:<35} {:<31} {:<10} {:<10} {:<15}",
                "",
                "Total Earnings:",
                "",
                money(employee.total_hours),
                money(employee.total_amount)
            );
            let _ = writeln!(out, "{light}");
        }
    }

    let _ = writeln!(out, "{heavy}");
    out
}

fn earning_columns(entry: &EarningEntry) -> String {
    format!(
        "{:<15} {:<15} {:<10} {:<10} {:<15}",
        entry.earning_type,
        entry.date,
        money(entry.rate),
        money(entry.hours),
        money(entry.amount)
    )
}

fn money(value: Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}
