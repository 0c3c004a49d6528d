//! Configuration module for pagecount.
//!
//! This module holds the validated, normalized configuration that drives a
//! counting run. The CLI builds it from arguments; library users can build
//! it directly. It handles:
//! - Validation of option combinations
//! - Application of defaults
//! - Output overwrite policy

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::report::ReportFormat;
use crate::utils::is_pdf_path;

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Complete configuration for a counting run.
#[derive(Debug, Clone)]
pub struct Config {
    /// PDF file or directory to count.
    pub target: PathBuf,

    /// Report output path; `None` prints the report to stdout.
    pub output: Option<PathBuf>,

    /// Report format.
    pub format: ReportFormat,

    /// Descend into subdirectories when the target is a directory.
    pub recursive: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Report file overwrite behavior.
    pub overwrite_mode: OverwriteMode,
}

impl Config {
    /// Create a configuration for `target` with default settings.
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            output: None,
            format: ReportFormat::default(),
            recursive: false,
            verbose: false,
            quiet: false,
            overwrite_mode: OverwriteMode::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - The output path is the target itself
    /// - The output path has a `.pdf` suffix
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            bail!("No target specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if let Some(output) = &self.output {
            if output == &self.target {
                bail!(
                    "Output file cannot be the same as the target: {}",
                    output.display()
                );
            }

            if is_pdf_path(output) {
                bail!(
                    "Output file must not have a .pdf extension: {}",
                    output.display()
                );
            }
        }

        Ok(())
    }

    /// Whether the report is written to a file rather than stdout.
    pub fn writes_to_file(&self) -> bool {
        self.output.is_some()
    }
}
