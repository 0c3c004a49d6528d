//! CLI argument parsing for count-pdf-page.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled by the build script to render the man page, so it
//! only depends on `clap` and the `pagecount` library.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use pagecount::config::{Config, OverwriteMode};
use pagecount::error::{PageCountError, Result};
use pagecount::report::ReportFormat;

/// Count the pages of PDF files and produce a report.
///
/// count-pdf-page reads every PDF file in a directory (or a single PDF
/// file), counts its pages and prints a Markdown table with a total.
/// Files that cannot be read are listed with an error and never stop
/// the run.
#[derive(Parser, Debug)]
#[command(name = "count-pdf-page")]
#[command(version)]
#[command(about = "Count the pages of PDF files and produce a report", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory of PDF files, or a single PDF file
    ///
    /// Examples:
    ///   count-pdf-page ./docs
    ///   count-pdf-page ./docs -o pages.md
    ///   count-pdf-page manual.pdf
    #[arg(value_name = "PATH")]
    pub target: PathBuf,

    /// Write the report to this file instead of stdout
    ///
    /// The file is written atomically. Use --force to overwrite an
    /// existing file without confirmation.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format
    ///
    /// - markdown: table of files with a summary line (default)
    /// - json: machine-readable document
    #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
    #[arg(env = "COUNT_PDF_PAGE_FORMAT")]
    #[arg(value_parser = ["markdown", "json"])]
    pub format: String,

    /// Descend into subdirectories
    ///
    /// Nested files are listed by their path relative to the scanned
    /// directory, e.g. "reports/2024/q1.pdf".
    #[arg(short, long)]
    pub recursive: bool,

    /// Force overwrite of an existing report file without confirmation
    #[arg(long)]
    pub force: bool,

    /// Never overwrite an existing report file
    ///
    /// If the output file already exists, exit with an error
    /// instead of prompting or overwriting.
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Verbose output - show the page count of each file as it is read
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only the report, warnings and errors will be printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the report format is unknown or the resulting
    /// configuration is inconsistent.
    pub fn to_config(&self) -> Result<Config> {
        let format = ReportFormat::from_str(&self.format)?;

        // Determine overwrite mode
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let config = Config {
            target: self.target.clone(),
            output: self.output.clone(),
            format,
            recursive: self.recursive,
            verbose: self.verbose,
            quiet: self.quiet,
            overwrite_mode,
        };

        config.validate().map_err(|e| {
            PageCountError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// Performs early validation that doesn't require file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(PageCountError::invalid_config("No target specified"));
        }

        if self.force && self.no_clobber {
            return Err(PageCountError::invalid_config(
                "Cannot use both --force and --no-clobber",
            ));
        }

        ReportFormat::from_str(&self.format)?;

        Ok(())
    }
}
