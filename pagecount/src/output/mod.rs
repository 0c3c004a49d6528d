//! Output formatting and display for pagecount.
//!
//! This module handles all user-facing status output:
//! - Formatted status messages
//! - Per-file progress
//! - Warning display for files that could not be read
//! - Summary lines
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use pagecount::output::OutputFormatter;
//! use pagecount::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Scanning directory");
//! formatter.success("Report saved");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::config::Config;
use crate::scan::{ScanEntry, ScanResult};

/// Create an output formatter from configuration.
pub fn create_formatter(config: &Config) -> OutputFormatter {
    OutputFormatter::from_config(config)
}

/// One-line description of a scanned file.
pub fn describe_entry(entry: &ScanEntry) -> String {
    match (entry.outcome.page_count(), entry.outcome.failure()) {
        (Some(pages), _) => format!("{}: {pages} pages", entry.name),
        (None, Some(failure)) => format!("{}: Error ({failure})", entry.name),
        (None, None) => format!("{}: Error", entry.name),
    }
}

/// Display the outcome of a scan to the user.
///
/// Warns about every file that could not be read, then prints the
/// page total.
pub fn display_scan_summary(formatter: &OutputFormatter, result: &ScanResult) {
    if result.is_empty() {
        formatter.warning("No PDF files found");
        return;
    }

    for entry in result.failures() {
        formatter.warning(&format!("Error reading {}", describe_entry(entry)));
    }

    formatter.info(&format!(
        "Counted {} page(s) in {} of {} file(s)",
        result.total_pages(),
        result.files_read(),
        result.len()
    ));
}
