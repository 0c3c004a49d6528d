//! Integration tests for directory scanning with real documents.

use pagecount::error::FailureKind;
use pagecount::scan::{Scanner, scan_directory};
use pagecount::utils::is_pdf_path;
use std::fs;

use crate::common::{scratch_dir, write_pdf};

#[test]
fn test_scan_mixed_directory() {
    let dir = scratch_dir(&[("a.pdf", Some(5)), ("b.pdf", None), ("c.pdf", Some(10))]);

    let result = scan_directory(dir.path()).unwrap();

    let names: Vec<&str> = result.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a.pdf", "b.pdf", "c.pdf"]);
    assert_eq!(result.total_pages(), 15);
    assert_eq!(result.files_read(), 2);
    assert_eq!(
        result.entries()[1].outcome.failure_kind(),
        Some(FailureKind::Malformed)
    );
}

#[test]
fn test_scan_ignores_other_entries() {
    let dir = scratch_dir(&[("doc.pdf", Some(2)), ("notes.txt", None)]);
    fs::create_dir(dir.path().join("folder.pdf")).unwrap();
    fs::write(dir.path().join("README"), "readme").unwrap();

    let result = scan_directory(dir.path()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.entries()[0].name, "doc.pdf");
    assert_eq!(result.total_pages(), 2);
}

#[test]
fn test_scan_recursive_tree() {
    let dir = scratch_dir(&[
        ("top.pdf", Some(1)),
        ("2024/q1.pdf", Some(3)),
        ("2024/q2.PDF", Some(4)),
        ("2024/drafts/old.pdf", None),
    ]);

    let flat = Scanner::new().scan(dir.path()).unwrap();
    assert_eq!(flat.len(), 1);
    assert_eq!(flat.total_pages(), 1);

    let deep = Scanner::new().recursive(true).scan(dir.path()).unwrap();
    let names: Vec<&str> = deep.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["2024/drafts/old.pdf", "2024/q1.pdf", "2024/q2.PDF", "top.pdf"]
    );
    assert_eq!(deep.total_pages(), 8);
    assert_eq!(deep.files_failed(), 1);
}

#[test]
fn test_discover_matches_scan_order() {
    let dir = scratch_dir(&[("b.pdf", Some(1)), ("a.pdf", Some(1)), ("c.txt", None)]);
    let scanner = Scanner::new();

    let discovered = scanner.discover(dir.path()).unwrap();
    let names: Vec<&str> = discovered.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["a.pdf", "b.pdf"]);
    assert!(discovered.iter().all(|(_, p)| is_pdf_path(p)));

    let scanned = scanner.scan(dir.path()).unwrap();
    let scanned_names: Vec<&str> = scanned.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, scanned_names);
}

#[test]
fn test_scan_is_repeatable() {
    let dir = scratch_dir(&[("x.pdf", Some(7)), ("y.pdf", None), ("z.pdf", Some(2))]);

    let first = scan_directory(dir.path()).unwrap();
    let second = scan_directory(dir.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_scan_file_counts_single_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.pdf");
    write_pdf(&path, 12);

    let result = Scanner::new().scan_file(&path).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.entries()[0].name, "single.pdf");
    assert_eq!(result.total_pages(), 12);
}
