//! PDF page counting.
//!
//! Page extraction is delegated to `lopdf`. This module only turns its
//! output (or its errors) into a page count or a [`FileFailure`].
//!
//! # Examples
//!
//! ```no_run
//! use pagecount::io::reader::{PageCounter, PdfPageCounter};
//! use std::path::Path;
//!
//! let counter = PdfPageCounter::new();
//! match counter.count_pages(Path::new("document.pdf")) {
//!     Ok(pages) => println!("{pages} pages"),
//!     Err(failure) => eprintln!("Error: {failure}"),
//! }
//! ```

use lopdf::Document;
use std::path::Path;

use crate::error::FileFailure;

/// Capability that extracts the page count from a single file.
///
/// Implemented by [`PdfPageCounter`] and by any
/// `Fn(&Path) -> Result<usize, FileFailure>` closure.
pub trait PageCounter {
    /// Count the pages of the PDF at `path`.
    fn count_pages(&self, path: &Path) -> Result<usize, FileFailure>;
}

impl<F> PageCounter for F
where
    F: Fn(&Path) -> Result<usize, FileFailure>,
{
    fn count_pages(&self, path: &Path) -> Result<usize, FileFailure> {
        self(path)
    }
}

/// Page counter backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageCounter;

impl PdfPageCounter {
    /// Create a new lopdf-backed counter.
    pub fn new() -> Self {
        Self
    }

    /// Parse the PDF at `path` into a document.
    ///
    /// # Errors
    ///
    /// - [`FailureKind::Unreadable`](crate::error::FailureKind::Unreadable)
    ///   if the file cannot be read
    /// - [`FailureKind::Encrypted`](crate::error::FailureKind::Encrypted)
    ///   if lopdf rejects it for encryption
    /// - [`FailureKind::Malformed`](crate::error::FailureKind::Malformed)
    ///   for any other parse error
    pub fn load(&self, path: &Path) -> Result<Document, FileFailure> {
        let bytes = std::fs::read(path).map_err(|e| FileFailure::unreadable(e.to_string()))?;

        Document::load_mem(&bytes).map_err(|e| {
            let err_msg = e.to_string();
            let lowered = err_msg.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                FileFailure::encrypted(err_msg)
            } else {
                FileFailure::malformed(err_msg)
            }
        })
    }
}

impl PageCounter for PdfPageCounter {
    fn count_pages(&self, path: &Path) -> Result<usize, FileFailure> {
        let doc = self.load(path)?;
        Ok(doc.get_pages().len())
    }
}
