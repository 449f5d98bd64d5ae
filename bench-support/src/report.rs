//! Result formatting and printing.
//!
//! Output format is fixed: a banner per combination, then one line per
//! workload entry with the label in a fixed-width column, elapsed
//! milliseconds to two decimals in an 8-character field, and the allocation
//! count in an 8-character field:
//!
//! ```text
//! ===> SimpleBackend (1000 translations)
//!
//! store                  12.34 ms      5678 objects
//! t (depth=3)             0.87 ms      1000 objects
//! ```
//!
//! Formatting is pure (`format_line`) so it can be tested; printing wrappers
//! echo the elapsed seconds back to the caller for optional aggregation.

use std::time::Duration;

use crate::measure::Measurement;

/// Default label column width.
pub const LABEL_WIDTH: usize = 20;

/// Formats one result line at an explicit label width.
///
/// Labels longer than `width` are truncated; shorter ones are left-justified
/// and padded to the column.
pub fn format_line(label: &str, width: usize, elapsed: Duration, allocations: u64) -> String {
    let label = if label.len() > width { &label[..width] } else { label };
    format!(
        "{label:<width$}{ms:8.2} ms  {allocations:8} objects",
        ms = elapsed.as_secs_f64() * 1000.0,
    )
}

/// Prints one measurement at the default width; returns elapsed seconds.
pub fn line(measurement: &Measurement) -> f64 {
    println!(
        "{}",
        format_line(
            measurement.label,
            LABEL_WIDTH,
            measurement.elapsed,
            measurement.allocations,
        )
    );
    measurement.elapsed.as_secs_f64()
}

/// Prints the banner announcing one combination's results.
pub fn announce(combination_name: &str, n: usize) {
    println!("===> {combination_name} ({n} translations)\n");
}
