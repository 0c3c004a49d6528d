//! Integration tests for rendering and writing reports.

use pagecount::io::{ReportWriter, save_report};
use pagecount::report::ReportFormat;
use pagecount::scan::scan_directory;
use serde_json::Value;

use crate::common::{report_path, scratch_dir};

#[test]
fn test_markdown_report_for_directory() {
    let dir = scratch_dir(&[("a.pdf", Some(5)), ("b.pdf", None), ("c.pdf", Some(10))]);
    let result = scan_directory(dir.path()).unwrap();

    let report = ReportFormat::Markdown.render(&result).unwrap();

    let expected = "# PDF Page Count Report\n\
                    \n\
                    | File | Pages |\n\
                    |------|-------|\n\
                    | a.pdf | 5 |\n\
                    | b.pdf | Error |\n\
                    | c.pdf | 10 |\n\
                    \n\
                    **Summary:** 15 total pages, 2 of 3 files read successfully.\n";
    assert_eq!(report, expected);
}

#[test]
fn test_markdown_report_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = scan_directory(dir.path()).unwrap();

    let report = ReportFormat::Markdown.render(&result).unwrap();
    assert!(report.contains("No PDF files found."));
    assert!(report.contains("0 total pages, 0 of 0 files read successfully."));
    assert!(!report.contains("| File | Pages |"));
}

#[test]
fn test_markdown_report_is_idempotent() {
    let dir = scratch_dir(&[("one.pdf", Some(1)), ("two.pdf", Some(2))]);
    let result = scan_directory(dir.path()).unwrap();

    let first = ReportFormat::Markdown.render(&result).unwrap();
    let second = ReportFormat::Markdown.render(&result).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_report_for_directory() {
    let dir = scratch_dir(&[("a.pdf", Some(3)), ("b.pdf", None)]);
    let result = scan_directory(dir.path()).unwrap();

    let json = ReportFormat::Json.render(&result).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["totalPages"], 3);
    assert_eq!(value["filesRead"], 1);
    assert_eq!(value["filesTotal"], 2);
    assert_eq!(value["entries"][0]["file"], "a.pdf");
    assert_eq!(value["entries"][1]["errorKind"], "malformed");
}

#[tokio::test]
async fn test_write_report_to_disk() {
    let dir = scratch_dir(&[("a.pdf", Some(4))]);
    let result = scan_directory(dir.path()).unwrap();
    let report = ReportFormat::Markdown.render(&result).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = report_path(&out, "pages.md");
    let stats = ReportWriter::new()
        .save_with_stats(&report, &path)
        .await
        .unwrap();

    assert_eq!(stats.bytes_written, report.len() as u64);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
}

#[tokio::test]
async fn test_save_report_overwrites() {
    let out = tempfile::tempdir().unwrap();
    let path = report_path(&out, "pages.md");

    save_report("first\n", &path).await.unwrap();
    save_report("second\n", &path).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
}
