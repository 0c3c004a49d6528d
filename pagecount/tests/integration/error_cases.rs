//! Integration tests for error handling and edge cases.

use pagecount::error::{FailureKind, PageCountError};
use pagecount::scan::{Scanner, scan_directory};
use pagecount::{ReportFormat, count_pdf_pages};
use std::path::Path;

use crate::common::{scratch_dir, write_pdf};

#[test]
fn test_error_missing_directory() {
    let result = scan_directory(Path::new("/nonexistent/pagecount/dir"));

    let err = result.unwrap_err();
    assert!(matches!(err, PageCountError::DirectoryNotFound { .. }));
    assert!(err.is_fatal());
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_error_file_as_directory() {
    let dir = scratch_dir(&[("a.pdf", Some(1))]);

    let err = scan_directory(&dir.path().join("a.pdf")).unwrap_err();
    assert!(matches!(err, PageCountError::DirectoryNotFound { .. }));
}

#[test]
fn test_error_single_corrupted_file() {
    let dir = scratch_dir(&[("corrupted.pdf", None)]);

    let result = scan_directory(dir.path()).unwrap();
    assert_eq!(result.total_pages(), 0);
    assert_eq!(result.files_failed(), 1);

    let report = ReportFormat::Markdown.render(&result).unwrap();
    assert!(report.contains("| corrupted.pdf | Error |"));
    assert!(report.contains("0 total pages, 0 of 1 files read successfully."));
}

#[test]
fn test_error_empty_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pdf");
    std::fs::write(&path, b"").unwrap();

    let failure = count_pdf_pages(&path).unwrap_err();
    assert_eq!(failure.kind, FailureKind::Malformed);
}

#[test]
fn test_error_zero_page_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    write_pdf(&path, 0);

    let failure = count_pdf_pages(&path).unwrap_err();
    assert_eq!(failure.kind, FailureKind::NoPages);

    let result = scan_directory(dir.path()).unwrap();
    assert_eq!(result.total_pages(), 0);
    assert_eq!(
        result.entries()[0].outcome.failure_kind(),
        Some(FailureKind::NoPages)
    );
}

#[test]
fn test_error_missing_single_file() {
    let err = Scanner::new()
        .scan_file(Path::new("/nonexistent/pagecount/file.pdf"))
        .unwrap_err();

    assert!(matches!(err, PageCountError::TargetNotFound { .. }));
}

#[test]
fn test_error_missing_file_counter() {
    let failure = count_pdf_pages(Path::new("/nonexistent/pagecount/file.pdf")).unwrap_err();
    assert_eq!(failure.kind, FailureKind::Unreadable);
}

/// Make `path` unreadable, returning false when the current user can still
/// list it (for example when running as root).
#[cfg(unix)]
fn lock_directory(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o000)).unwrap();
    std::fs::read_dir(path).is_err()
}

#[cfg(unix)]
fn unlock_directory(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_error_unreadable_root() {
    let dir = scratch_dir(&[("a.pdf", Some(1))]);
    let root = dir.path().join("locked");
    std::fs::create_dir(&root).unwrap();
    write_pdf(&root.join("b.pdf"), 1);

    if !lock_directory(&root) {
        unlock_directory(&root);
        return;
    }
    let result = scan_directory(&root);
    unlock_directory(&root);

    let err = result.unwrap_err();
    assert!(matches!(err, PageCountError::DirectoryNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[cfg(unix)]
#[test]
fn test_error_unreadable_subdirectory_when_recursive() {
    let dir = scratch_dir(&[("a.pdf", Some(1)), ("sub/b.pdf", Some(2))]);
    let sub = dir.path().join("sub");

    if !lock_directory(&sub) {
        unlock_directory(&sub);
        return;
    }
    let flat = Scanner::new().scan(dir.path());
    let deep = Scanner::new().recursive(true).scan(dir.path());
    unlock_directory(&sub);

    // A flat scan never lists the subdirectory.
    assert_eq!(flat.unwrap().total_pages(), 1);

    let err = deep.unwrap_err();
    match &err {
        PageCountError::WalkFailed { path, .. } => assert_eq!(path, &sub),
        other => panic!("expected WalkFailed, got {other:?}"),
    }
    assert!(err.is_fatal());
}
