//! Scan outcomes and the aggregated scan result.

use std::path::PathBuf;

use crate::error::{FailureKind, FileFailure};

/// Outcome of counting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was read; holds its page count (always at least 1).
    Success(usize),
    /// The file could not be counted.
    Failure(FileFailure),
}

impl Outcome {
    /// Page count, if the file was read successfully.
    pub fn page_count(&self) -> Option<usize> {
        match self {
            Self::Success(pages) => Some(*pages),
            Self::Failure(_) => None,
        }
    }

    /// Failure details, if the file could not be counted.
    pub fn failure(&self) -> Option<&FileFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Whether the file was read successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the file could not be counted.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure category, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure().map(|f| f.kind)
    }
}

impl From<Result<usize, FileFailure>> for Outcome {
    /// Zero pages is never a success.
    fn from(result: Result<usize, FileFailure>) -> Self {
        match result {
            Ok(0) => Self::Failure(FileFailure::no_pages()),
            Ok(pages) => Self::Success(pages),
            Err(failure) => Self::Failure(failure),
        }
    }
}

/// One scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Name relative to the scanned directory (`/`-separated).
    pub name: String,
    /// Full path that was counted.
    pub path: PathBuf,
    /// Counting outcome.
    pub outcome: Outcome,
}

impl ScanEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            outcome,
        }
    }
}

/// Ordered per-file outcomes of a scan together with their page total.
///
/// The total is computed while the result is built, so it always equals
/// the sum of successful page counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    entries: Vec<ScanEntry>,
    total_pages: usize,
}

impl ScanResult {
    /// Build a result from entries, computing the page total.
    ///
    /// Entry order is preserved as given.
    pub fn from_entries(entries: Vec<ScanEntry>) -> Self {
        let total_pages = entries
            .iter()
            .filter_map(|entry| entry.outcome.page_count())
            .sum();

        Self {
            entries,
            total_pages,
        }
    }

    /// Entries in scan order.
    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    /// Sum of page counts over successful entries.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of scanned files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no files were scanned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files read successfully.
    pub fn files_read(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_success())
            .count()
    }

    /// Number of files that could not be counted.
    pub fn files_failed(&self) -> usize {
        self.len() - self.files_read()
    }

    /// Entries that could not be counted, in scan order.
    pub fn failures(&self) -> impl Iterator<Item = &ScanEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_failure())
    }

    /// Consume the result, returning entries and page total.
    pub fn into_parts(self) -> (Vec<ScanEntry>, usize) {
        (self.entries, self.total_pages)
    }
}
