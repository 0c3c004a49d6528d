//! pagecount - Count the pages of PDF documents.
//!
//! This library scans a directory for PDF files, counts the pages of each
//! one and renders a report of the results. It supports:
//!
//! - Flat and recursive directory scans in a reproducible order
//! - Case-insensitive `.pdf` matching
//! - Per-file failures that never abort a scan
//! - Markdown and JSON reports
//! - Atomic report writing
//!
//! # Examples
//!
//! ## Count a Directory
//!
//! ```no_run
//! use pagecount::report::ReportFormat;
//! use pagecount::scan_directory;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = scan_directory(Path::new("./docs"))?;
//! print!("{}", ReportFormat::Markdown.render(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pagecount::io::ReportWriter;
//! use pagecount::report::render_markdown;
//! use pagecount::scan::Scanner;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = Scanner::new().recursive(true).scan(Path::new("./archive"))?;
//! let report = render_markdown(result.entries(), result.total_pages());
//!
//! ReportWriter::new().save(&report, Path::new("pages.md")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod report;
pub mod scan;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{FileFailure, PageCountError, Result};
pub use io::count_pdf_pages;
pub use report::ReportFormat;
pub use scan::{ScanResult, Scanner, scan_directory};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
