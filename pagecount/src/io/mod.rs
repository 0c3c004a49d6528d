//! I/O operations for pagecount.
//!
//! This module handles all file I/O:
//! - Counting pages of PDF documents on disk ([`reader`])
//! - Writing rendered reports to disk ([`writer`])
//!
//! # Examples
//!
//! ```no_run
//! use pagecount::io::{count_pdf_pages, ReportWriter};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pages = count_pdf_pages(Path::new("input.pdf"))?;
//!
//! let writer = ReportWriter::new();
//! writer.save(&format!("{pages} pages\n"), Path::new("pages.txt")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{PageCounter, PdfPageCounter};
pub use writer::{ReportWriter, WriteOptions, WriteStatistics};

use crate::error::{FileFailure, Result};
use std::path::Path;

/// Count the pages of a single PDF file.
///
/// Convenience function using the default [`PdfPageCounter`]. A document
/// that parses but has no pages is reported as a
/// [`FailureKind::NoPages`](crate::error::FailureKind::NoPages) failure.
///
/// # Examples
///
/// ```no_run
/// use pagecount::io::count_pdf_pages;
/// use std::path::Path;
///
/// match count_pdf_pages(Path::new("document.pdf")) {
///     Ok(pages) => println!("{pages} pages"),
///     Err(failure) => eprintln!("Error reading document.pdf: {failure}"),
/// }
/// ```
pub fn count_pdf_pages(path: &Path) -> std::result::Result<usize, FileFailure> {
    match PdfPageCounter::new().count_pages(path)? {
        0 => Err(FileFailure::no_pages()),
        pages => Ok(pages),
    }
}

/// Save rendered report text to a file.
///
/// Convenience function using the default [`ReportWriter`].
pub async fn save_report(contents: &str, path: &Path) -> Result<()> {
    ReportWriter::new().save(contents, path).await
}
