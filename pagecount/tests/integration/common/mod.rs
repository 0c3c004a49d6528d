//! Shared helpers for the pagecount integration tests.
//!
//! Test documents are generated with `lopdf` so no binary fixtures are
//! checked in.

#![allow(dead_code)]

use lopdf::{Document, Object, dictionary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a PDF with `pages` blank pages to `path`.
pub fn write_pdf(path: &Path, pages: u32) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(pages as i64),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    doc.save(path).expect("Failed to write test PDF");
}

/// Write a file with a `.pdf` name that is not a PDF.
pub fn write_corrupted(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, b"this is not a pdf").expect("Failed to write corrupted file");
}

/// Create a scratch directory populated with the given documents.
///
/// `Some(n)` writes a PDF with `n` pages, `None` writes a corrupted file.
pub fn scratch_dir(files: &[(&str, Option<u32>)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, pages) in files {
        let path = dir.path().join(name);
        match pages {
            Some(pages) => write_pdf(&path, *pages),
            None => write_corrupted(&path),
        }
    }
    dir
}

/// Path for a report inside `dir`.
pub fn report_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
