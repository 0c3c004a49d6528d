//! Report writing.
//!
//! Rendered reports are plain UTF-8 text. The writer stores them on disk
//! with:
//! - Atomic writes (write to temp file, then rename)
//! - Write statistics
//! - Pre-flight checks on the output directory
//!
//! # Examples
//!
//! ```no_run
//! use pagecount::io::writer::ReportWriter;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let writer = ReportWriter::new();
//! writer.save("# PDF Page Count Report\n", Path::new("report.md")).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;

use crate::error::{PageCountError, Result};

/// Options for writing report files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Number of bytes written.
    pub bytes_written: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format the written size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.bytes_written)
    }
}

/// Report writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    options: WriteOptions,
}

impl ReportWriter {
    /// Create a new report writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions { atomic: false },
        }
    }

    /// Save report text to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Write operation fails
    pub async fn save(&self, contents: &str, path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(contents, path).await?;
        Ok(())
    }

    /// Save report text and return statistics about the operation.
    pub async fn save_with_stats(&self, contents: &str, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();
        let path_buf = path.to_path_buf();

        let write_path = if self.options.atomic {
            temp_path_for(&path_buf)
        } else {
            path_buf.clone()
        };

        let mut file = tokio::fs::File::create(&write_path).await.map_err(|e| {
            PageCountError::FailedToCreateOutput {
                path: write_path.clone(),
                source: e,
            }
        })?;

        let write_err = |e| PageCountError::FailedToWrite {
            path: write_path.clone(),
            source: e,
        };
        file.write_all(contents.as_bytes()).await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        if self.options.atomic {
            tokio::fs::rename(&write_path, &path_buf)
                .await
                .map_err(|e| PageCountError::FailedToWrite {
                    path: path_buf.clone(),
                    source: e,
                })?;
        }

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            bytes_written: contents.len() as u64,
            output_path: path_buf,
        })
    }

    /// Check if a file can be written to the given path.
    ///
    /// Performs pre-flight checks without actually writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory doesn't exist or is read-only.
    pub async fn can_write(&self, path: &Path) -> Result<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        let metadata = tokio::fs::metadata(parent).await.map_err(|_| {
            PageCountError::invalid_config(format!(
                "Output directory does not exist: {}",
                parent.display()
            ))
        })?;

        if !metadata.is_dir() {
            return Err(PageCountError::invalid_config(format!(
                "Output directory is not a directory: {}",
                parent.display()
            )));
        }

        if metadata.permissions().readonly() {
            return Err(PageCountError::invalid_config(format!(
                "Output directory is not writable: {}",
                parent.display()
            )));
        }

        Ok(())
    }
}

/// Temporary sibling path used for atomic writes (`report.md` -> `report.md.tmp`).
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
