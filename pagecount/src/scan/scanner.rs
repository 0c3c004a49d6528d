//! Directory scanning.
//!
//! The scanner walks a directory, counts every PDF it finds and aggregates
//! the outcomes into a [`ScanResult`].
//!
//! Files are processed one at a time in a fixed order: entries are sorted
//! by their name relative to the scanned directory, byte-wise, so the order
//! is case-sensitive (`B.pdf` before `a.pdf`) and identical across runs on an
//! unchanged directory.
//!
//! A file that cannot be counted becomes an [`Outcome::Failure`] entry and
//! the scan carries on. Only problems with the directory itself abort it.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::result::{Outcome, ScanEntry, ScanResult};
use crate::error::{FileFailure, PageCountError, Result};
use crate::io::reader::{PageCounter, PdfPageCounter};
use crate::utils::{entry_name, has_pdf_suffix, is_pdf_path};

/// A PDF-looking path found while walking.
#[derive(Debug)]
struct Candidate {
    name: String,
    path: PathBuf,
    /// Set when the walker could not even stat the path.
    walk_failure: Option<FileFailure>,
}

/// Directory scanner generic over the page counting capability.
#[derive(Debug, Clone)]
pub struct Scanner<C = PdfPageCounter> {
    counter: C,
    recursive: bool,
}

impl Scanner<PdfPageCounter> {
    /// Create a scanner backed by `lopdf`.
    pub fn new() -> Self {
        Self::with_counter(PdfPageCounter::new())
    }
}

impl Default for Scanner<PdfPageCounter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PageCounter> Scanner<C> {
    /// Create a scanner with a custom page counter.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecount::error::FileFailure;
    /// use pagecount::scan::Scanner;
    /// use std::path::Path;
    ///
    /// let scanner = Scanner::with_counter(|_: &Path| -> Result<usize, FileFailure> { Ok(1) });
    /// assert!(!scanner.is_recursive());
    /// ```
    pub fn with_counter(counter: C) -> Self {
        Self {
            counter,
            recursive: false,
        }
    }

    /// Descend into subdirectories when scanning.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Whether subdirectories are scanned.
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// List the PDF files a scan of `dir` would count, in scan order.
    ///
    /// # Errors
    ///
    /// - [`PageCountError::DirectoryNotFound`] if `dir` is missing, not a
    ///   directory, or unreadable
    /// - [`PageCountError::WalkFailed`] if a subdirectory cannot be walked
    pub fn discover(&self, dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        Ok(self
            .candidates(dir)?
            .into_iter()
            .map(|candidate| (candidate.name, candidate.path))
            .collect())
    }

    /// Scan `dir` and count every PDF in it.
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::discover`]. Per-file problems are never errors;
    /// they are recorded as [`Outcome::Failure`] entries.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pagecount::scan::Scanner;
    /// use std::path::Path;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = Scanner::new().scan(Path::new("./docs"))?;
    /// println!("{} pages in {} files", result.total_pages(), result.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn scan(&self, dir: &Path) -> Result<ScanResult> {
        self.scan_with_progress(dir, |_, _, _| {})
    }

    /// Scan `dir`, calling `on_progress(index, total, entry)` after each file.
    ///
    /// `index` is zero-based and follows scan order.
    pub fn scan_with_progress<F>(&self, dir: &Path, mut on_progress: F) -> Result<ScanResult>
    where
        F: FnMut(usize, usize, &ScanEntry),
    {
        let candidates = self.candidates(dir)?;
        let total = candidates.len();
        let mut entries = Vec::with_capacity(total);

        for (idx, candidate) in candidates.into_iter().enumerate() {
            let outcome = match candidate.walk_failure {
                Some(failure) => Outcome::Failure(failure),
                None => self.count(&candidate.path),
            };
            let entry = ScanEntry::new(candidate.name, candidate.path, outcome);
            on_progress(idx, total, &entry);
            entries.push(entry);
        }

        Ok(ScanResult::from_entries(entries))
    }

    /// Count a single file, producing a one-entry result.
    ///
    /// # Errors
    ///
    /// Returns [`PageCountError::TargetNotFound`] if `path` does not exist.
    pub fn scan_file(&self, path: &Path) -> Result<ScanResult> {
        if !path.exists() {
            return Err(PageCountError::target_not_found(path));
        }

        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        let entry = ScanEntry::new(name, path, self.count(path));

        Ok(ScanResult::from_entries(vec![entry]))
    }

    fn count(&self, path: &Path) -> Outcome {
        Outcome::from(self.counter.count_pages(path))
    }

    fn candidates(&self, dir: &Path) -> Result<Vec<Candidate>> {
        if !dir.is_dir() || std::fs::read_dir(dir).is_err() {
            return Err(PageCountError::directory_not_found(dir));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true);

        let mut candidates = Vec::new();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && has_pdf_suffix(entry.file_name()) {
                        candidates.push(Candidate {
                            name: entry_name(dir, entry.path()),
                            path: entry.into_path(),
                            walk_failure: None,
                        });
                    }
                }
                Err(err) if err.depth() == 0 => {
                    return Err(PageCountError::directory_not_found(dir));
                }
                Err(err) => match err.path() {
                    Some(path) if is_pdf_path(path) => candidates.push(Candidate {
                        name: entry_name(dir, path),
                        path: path.to_path_buf(),
                        walk_failure: Some(FileFailure::unreadable(err.to_string())),
                    }),
                    // Unlistable subdirectory.
                    Some(path) if path.is_dir() && err.loop_ancestor().is_none() => {
                        return Err(PageCountError::WalkFailed {
                            path: path.to_path_buf(),
                            reason: err.to_string(),
                        });
                    }
                    None => {
                        return Err(PageCountError::WalkFailed {
                            path: dir.to_path_buf(),
                            reason: err.to_string(),
                        });
                    }
                    // Dangling links and symlink loops that are not PDFs.
                    Some(_) => continue,
                },
            }
        }

        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(candidates)
    }
}
