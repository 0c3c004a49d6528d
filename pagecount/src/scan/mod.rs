//! Directory scanning and page aggregation.
//!
//! # Examples
//!
//! ```no_run
//! use pagecount::scan::scan_directory;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = scan_directory(Path::new("./docs"))?;
//! for entry in result.entries() {
//!     match entry.outcome.page_count() {
//!         Some(pages) => println!("{}: {pages} pages", entry.name),
//!         None => println!("{}: Error", entry.name),
//!     }
//! }
//! println!("Total: {} pages", result.total_pages());
//! # Ok(())
//! # }
//! ```

pub mod result;
pub mod scanner;

pub use result::{Outcome, ScanEntry, ScanResult};
pub use scanner::Scanner;

use crate::error::Result;
use std::path::Path;

/// Scan a directory (non-recursively) with the default lopdf counter.
///
/// # Errors
///
/// Returns [`PageCountError::DirectoryNotFound`](crate::error::PageCountError::DirectoryNotFound)
/// if `dir` is missing, not a directory, or unreadable.
pub fn scan_directory(dir: &Path) -> Result<ScanResult> {
    Scanner::new().scan(dir)
}
