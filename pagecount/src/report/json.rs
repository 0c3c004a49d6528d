//! JSON report rendering.

use serde::Serialize;

use crate::error::{FailureKind, Result};
use crate::scan::ScanEntry;

/// Serialized form of a whole report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    /// Per-file rows in scan order.
    pub entries: Vec<JsonEntry<'a>>,
    /// Page total as given by the caller.
    pub total_pages: usize,
    /// Number of files read successfully.
    pub files_read: usize,
    /// Number of files scanned.
    pub files_total: usize,
}

/// Serialized form of one scanned file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonEntry<'a> {
    /// Name relative to the scanned directory.
    pub file: &'a str,
    /// Page count for successfully read files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    /// Failure detail for files that could not be counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    /// Failure category for files that could not be counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
}

impl<'a> JsonReport<'a> {
    /// Build the serializable view of `entries`.
    pub fn new(entries: &'a [ScanEntry], total_pages: usize) -> Self {
        let rows: Vec<JsonEntry<'a>> = entries
            .iter()
            .map(|entry| {
                let failure = entry.outcome.failure();
                JsonEntry {
                    file: &entry.name,
                    pages: entry.outcome.page_count(),
                    error: failure.map(|f| f.detail.as_str()),
                    error_kind: failure.map(|f| f.kind),
                }
            })
            .collect();

        Self {
            files_read: rows.iter().filter(|row| row.pages.is_some()).count(),
            files_total: rows.len(),
            entries: rows,
            total_pages,
        }
    }
}

/// Render scan entries and their page total as pretty-printed JSON.
pub fn render_json(entries: &[ScanEntry], total_pages: usize) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&JsonReport::new(entries, total_pages))?;
    json.push('\n');
    Ok(json)
}
