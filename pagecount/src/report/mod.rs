//! Report rendering.
//!
//! Reports are rendered to text and never written here; storing them is
//! the job of [`crate::io::writer`].
//!
//! # Examples
//!
//! ```
//! use pagecount::report::ReportFormat;
//! use pagecount::scan::{Outcome, ScanEntry, ScanResult};
//!
//! let result = ScanResult::from_entries(vec![
//!     ScanEntry::new("manual.pdf", "manual.pdf", Outcome::Success(120)),
//! ]);
//! let text = ReportFormat::Markdown.render(&result).unwrap();
//! assert!(text.contains("120 total pages"));
//! ```

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

use std::fmt;
use std::str::FromStr;

use crate::error::{PageCountError, Result};
use crate::scan::ScanResult;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown document with a table of files.
    #[default]
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

impl ReportFormat {
    /// Render a scan result in this format.
    pub fn render(&self, result: &ScanResult) -> Result<String> {
        match self {
            Self::Markdown => Ok(render_markdown(result.entries(), result.total_pages())),
            Self::Json => render_json(result.entries(), result.total_pages()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = PageCountError;

    /// Parse a format name: "markdown" (or "md") or "json".
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(PageCountError::invalid_config(format!(
                "Invalid report format: {s}. Must be one of: markdown, json"
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Json => f.write_str("json"),
        }
    }
}
