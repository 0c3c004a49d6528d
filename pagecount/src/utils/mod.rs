//! Utilities for PDF file matching and entry naming.

use std::ffi::OsStr;
use std::path::Path;

const PDF_SUFFIX: &[u8] = b".pdf";

/// Check whether a file name ends in `.pdf`, ignoring ASCII case.
///
/// Works on the raw OS bytes, so non-UTF-8 names still match. A bare
/// `.pdf` file name matches too.
pub fn has_pdf_suffix(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() >= PDF_SUFFIX.len()
        && bytes[bytes.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}

/// Check whether the final component of `path` looks like a PDF.
pub fn is_pdf_path(path: &Path) -> bool {
    path.file_name().is_some_and(has_pdf_suffix)
}

/// Name of `path` relative to `root`, joined with `/`.
///
/// Falls back to the file name (or the whole path) when `path` is not
/// below `root`.
pub fn entry_name(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned(),
    }
}

/// Write a minimal PDF with `pages` blank A4 pages.
#[cfg(test)]
pub(crate) fn write_test_pdf(path: &Path, pages: u32) -> std::io::Result<()> {
    use lopdf::{Document, Object, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
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

    doc.save(path)?;
    Ok(())
}
