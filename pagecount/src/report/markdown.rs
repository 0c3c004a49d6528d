//! Markdown report rendering.

use crate::scan::ScanEntry;

/// Report heading.
pub const TITLE: &str = "# PDF Page Count Report";

/// Cell text for files that could not be counted.
pub const ERROR_CELL: &str = "Error";

/// Render scan entries and their page total as a markdown document.
///
/// `total_pages` is printed as given; keeping it equal to the sum of
/// successful entries is up to the caller. Output is deterministic, with
/// `\n` line endings and a single trailing newline.
///
/// # Examples
///
/// ```
/// use pagecount::report::render_markdown;
/// use pagecount::scan::{Outcome, ScanEntry};
///
/// let entries = vec![ScanEntry::new("a.pdf", "a.pdf", Outcome::Success(5))];
/// let report = render_markdown(&entries, 5);
/// assert!(report.contains("| a.pdf | 5 |"));
/// ```
pub fn render_markdown(entries: &[ScanEntry], total_pages: usize) -> String {
    let mut out = String::new();
    let files_read = entries.iter().filter(|e| e.outcome.is_success()).count();

    out.push_str(TITLE);
    out.push_str("\n\n");

    if entries.is_empty() {
        out.push_str("No PDF files found.\n");
    } else {
        out.push_str("| File | Pages |\n");
        out.push_str("|------|-------|\n");
        for entry in entries {
            let name = escape_cell(&entry.name);
            match entry.outcome.page_count() {
                Some(pages) => out.push_str(&format!("| {name} | {pages} |\n")),
                None => out.push_str(&format!("| {name} | {ERROR_CELL} |\n")),
            }
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "**Summary:** {} total pages, {} of {} files read successfully.\n",
        total_pages,
        files_read,
        entries.len()
    ));

    out
}

/// Escape characters that would break a markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
