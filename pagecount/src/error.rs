//! Error types for pagecount.
//!
//! Two layers of failure exist and they are kept apart:
//!
//! - [`PageCountError`] is fatal to the operation that raised it: a missing
//!   scan directory, an unwritable report path, an invalid configuration.
//! - [`FileFailure`] describes a single PDF that could not be counted. It is
//!   recorded in the scan result and never aborts a batch.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for pagecount operations.
pub type Result<T> = std::result::Result<T, PageCountError>;

/// Main error type for pagecount operations.
#[derive(Debug, thiserror::Error)]
pub enum PageCountError {
    /// The scan directory does not exist, is not a directory, or cannot be read.
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Path that was supposed to be scanned.
        path: PathBuf,
    },

    /// The counting target (file or directory) does not exist.
    #[error("Target not found: {}", path.display())]
    TargetNotFound {
        /// Path given as the target.
        path: PathBuf,
    },

    /// Directory traversal failed below the scan root.
    #[error("Failed to walk directory: {}\n  Reason: {reason}", path.display())]
    WalkFailed {
        /// Path where traversal failed.
        path: PathBuf,
        /// Reason reported by the walker.
        reason: String,
    },

    /// Report output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  Use --force to overwrite or choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create the report output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the report output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// User cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<anyhow::Error> for PageCountError {
    fn from(err: anyhow::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl PageCountError {
    /// Create a DirectoryNotFound error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a TargetNotFound error.
    pub fn target_not_found(path: impl Into<PathBuf>) -> Self {
        Self::TargetNotFound { path: path.into() }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error should stop all processing immediately.
    ///
    /// Returns true for directory-level scan failures, output failures and
    /// cancellation. The rest are usage errors the caller can correct.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. }
                | Self::TargetNotFound { .. }
                | Self::WalkFailed { .. }
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToWrite { .. }
                | Self::Cancelled
        )
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryNotFound { .. } => 2,
            Self::TargetNotFound { .. } => 2,
            Self::WalkFailed { .. } => 2,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
            Self::Serialization(_) => 1,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io(_) => 5,
        }
    }
}

/// Why a single PDF could not be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// File could not be opened or read.
    Unreadable,
    /// File contents are not a parseable PDF.
    Malformed,
    /// PDF is encrypted and cannot be opened without a password.
    Encrypted,
    /// PDF parsed but contains no pages.
    NoPages,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unreadable => "unreadable",
            Self::Malformed => "malformed PDF",
            Self::Encrypted => "encrypted PDF",
            Self::NoPages => "no pages",
        };
        f.write_str(label)
    }
}

/// Per-file counting failure.
///
/// Recorded as the outcome of a scan entry; it never aborts a scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct FileFailure {
    /// Failure category.
    pub kind: FailureKind,
    /// Human-readable detail, usually the underlying error message.
    pub detail: String,
}

impl FileFailure {
    /// Create a failure of the given kind.
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Create an Unreadable failure.
    pub fn unreadable(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Unreadable, detail)
    }

    /// Create a Malformed failure.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Malformed, detail)
    }

    /// Create an Encrypted failure.
    pub fn encrypted(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Encrypted, detail)
    }

    /// Create a NoPages failure.
    pub fn no_pages() -> Self {
        Self::new(FailureKind::NoPages, "document has zero pages")
    }
}
