//! count-pdf-page - Count the pages of PDF files and produce a report.
//!
//! The report goes to stdout (or the file given with `--output`); all
//! status messages go to stderr.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use pagecount::config::Config;
use pagecount::error::PageCountError;
use pagecount::io::ReportWriter;
use pagecount::output::{OutputFormatter, describe_entry, display_scan_summary};
use pagecount::scan::{ScanResult, Scanner};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        if !err.is_fatal() {
            eprintln!("Run 'count-pdf-page --help' for usage.");
        }
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PageCountError> {
    cli.validate()?;
    let config = cli.to_config()?;

    let formatter = OutputFormatter::from_config(&config);

    if formatter.is_verbose() {
        formatter.section(&format!("{} v{}", pagecount::NAME, pagecount::VERSION));
        formatter.blank_line();
    }

    let result = scan_target(&config, &formatter)?;
    let report = config.format.render(&result)?;

    match &config.output {
        Some(output) => {
            let writer = ReportWriter::new();
            writer.can_write(output).await?;
            handle_output_overwrite(&config, &formatter).await?;

            let write_stats = writer.save_with_stats(&report, output).await?;
            formatter.success(&format!(
                "Report written to {} ({})",
                output.display(),
                write_stats.format_file_size()
            ));
            formatter.detail(
                "Write time",
                &format!("{:.2}s", write_stats.write_time.as_secs_f64()),
            );
        }
        None => print!("{report}"),
    }

    display_scan_summary(&formatter, &result);

    Ok(())
}

/// Scan the configured target, a directory or a single file.
fn scan_target(config: &Config, formatter: &OutputFormatter) -> Result<ScanResult, PageCountError> {
    let target = &config.target;
    if !target.exists() {
        return Err(PageCountError::target_not_found(target));
    }

    let scanner = Scanner::new().recursive(config.recursive);

    if !target.is_dir() {
        formatter.debug(&format!("Reading {}", target.display()));
        return scanner.scan_file(target);
    }

    formatter.debug(&format!(
        "Scanning {}{}",
        target.display(),
        if config.recursive { " (recursive)" } else { "" }
    ));

    scanner.scan_with_progress(target, |idx, total, entry| {
        formatter.debug(&describe_entry(entry));
        formatter.progress(idx + 1, total, Some(entry.name.as_str()));
    })
}

/// Handle output file overwrite scenarios.
async fn handle_output_overwrite(
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<(), PageCountError> {
    use pagecount::config::OverwriteMode;

    let Some(output) = &config.output else {
        return Ok(());
    };

    if !output.exists() {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PageCountError::output_exists(output.clone())),
        OverwriteMode::Prompt => {
            // In quiet mode, treat as no-clobber
            if formatter.is_quiet() {
                return Err(PageCountError::output_exists(output.clone()));
            }

            formatter.warning(&format!("Output file already exists: {}", output.display()));

            use std::io::{self, Write};
            eprint!("Overwrite? [y/N]: ");
            io::stderr().flush().ok();

            let mut response = String::new();
            io::stdin().read_line(&mut response)?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PageCountError::Cancelled)
            }
        }
    }
}
