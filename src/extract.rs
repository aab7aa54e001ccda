//! Document extraction: one PDF in, one bundle out.
//!
//! [`extract_document`] is a linear pipeline. Every resource it opens (the
//! pdfium document, the Markdown temp file, each PNG) is owned by the call and
//! dropped on every exit path, so a failing document never leaks handles into
//! the next one. Files already written when a later step fails are left in
//! place.

use crate::config::ExtractionConfig;
use crate::engine::PdfEngine;
use crate::error::ExtractError;
use crate::output::DocumentReport;
use crate::pipeline::markdown::{self, MarkdownDocument};
use crate::pipeline::{encode, input, render, scan, text};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Seam between the batch driver and whatever produces bundles.
///
/// [`PdfExtractor`] is the real implementation; tests substitute their own
/// to exercise the driver's failure policy without pdfium.
pub trait DocumentExtractor {
    fn extract(&self, pdf_path: &Path) -> Result<DocumentReport, ExtractError>;
}

/// Extracts documents with a bound [`PdfEngine`].
pub struct PdfExtractor<'a> {
    engine: &'a PdfEngine,
    config: &'a ExtractionConfig,
}

impl<'a> PdfExtractor<'a> {
    pub fn new(engine: &'a PdfEngine, config: &'a ExtractionConfig) -> Self {
        Self { engine, config }
    }
}

impl DocumentExtractor for PdfExtractor<'_> {
    fn extract(&self, pdf_path: &Path) -> Result<DocumentReport, ExtractError> {
        extract_document(self.engine, pdf_path, self.config)
    }
}

/// Extract one PDF into `<source-dir>/<output_root>/<base-name>/`.
///
/// # Returns
/// A [`DocumentReport`] listing the bundle paths and the page count.
///
/// # Errors
/// - [`ExtractError::OpenFailed`] / [`ExtractError::NotAPdf`] — unreadable or invalid PDF
/// - [`ExtractError::OutputDirFailed`] / [`ExtractError::OutputWriteFailed`] /
///   [`ExtractError::ImageEncodeFailed`] — the bundle could not be written
/// - [`ExtractError::TextExtractionFailed`] / [`ExtractError::RenderFailed`] — a page failed
pub fn extract_document(
    engine: &PdfEngine,
    pdf_path: &Path,
    config: &ExtractionConfig,
) -> Result<DocumentReport, ExtractError> {
    let start = Instant::now();

    // ── Step 1: Open ─────────────────────────────────────────────────────
    input::validate_pdf(pdf_path)?;
    let document = render::open_document(engine, pdf_path)?;

    // ── Step 2: Prepare the bundle ───────────────────────────────────────
    let name = scan::base_name(pdf_path);
    let source_dir = pdf_path.parent().unwrap_or_else(|| Path::new(""));
    let bundle_dir = config.bundle_dir(source_dir, &name);
    std::fs::create_dir_all(&bundle_dir).map_err(|e| ExtractError::OutputDirFailed {
        path: bundle_dir.clone(),
        source: e,
    })?;
    debug!("Bundle directory: {}", bundle_dir.display());

    // ── Step 3: Walk pages ───────────────────────────────────────────────
    let pages = document.pages();
    let total_pages = pages.len() as usize;
    let mut md = MarkdownDocument::new(&name);
    let mut images = Vec::with_capacity(total_pages);

    for (idx, page) in pages.iter().enumerate() {
        let page_num = idx + 1;

        let page_text = text::extract_text(&page, page_num, config.normalize_line_endings)?;

        let image_name = markdown::page_image_name(&name, page_num);
        let image_path = bundle_dir.join(&image_name);
        let image = render::render_page(&page, page_num, config.zoom)?;
        encode::write_png(&image, &image_path)?;

        md.push_page(page_num, &page_text, &image_name);
        images.push(image_path);

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(&name, page_num, total_pages);
        }
    }

    // ── Step 4: Write content.md ─────────────────────────────────────────
    let markdown_path = bundle_dir.join(&config.markdown_file_name);
    write_markdown(&markdown_path, md.as_str())?;

    info!(
        "Extracted {}: {} pages in {}ms",
        name,
        total_pages,
        start.elapsed().as_millis()
    );

    Ok(DocumentReport {
        name,
        source: pdf_path.to_path_buf(),
        bundle_dir,
        markdown_path,
        page_count: md.page_count(),
        images,
    })
}

/// Write Markdown through a temp file and rename it into place, so a crash
/// mid-write never leaves a truncated `content.md` behind.
pub(crate) fn write_markdown(path: &Path, content: &str) -> Result<(), ExtractError> {
    let write_err = |source| ExtractError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, content.as_bytes()).map_err(write_err)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory in the way makes the rename fail.
        let path = dir.path().join("content.md");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_markdown(&path, "# doc\n\n").unwrap_err();

        assert!(matches!(err, ExtractError::OutputWriteFailed { .. }), "got: {err:?}");
        assert!(!dir.path().join("content.md.tmp").exists());
        assert!(path.join("keep").is_file());
    }

    #[test]
    fn write_markdown_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.md");
        std::fs::write(&path, "old").unwrap();

        write_markdown(&path, "# new\n\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# new\n\n");
        assert!(!dir.path().join("content.md.tmp").exists());
    }

    #[test]
    fn write_markdown_is_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.md");
        write_markdown(&path, "# Überblick — 概要\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Überblick — 概要\n"
        );
    }

    #[test]
    fn write_markdown_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_markdown(&dir.path().join("missing/content.md"), "x").unwrap_err();
        assert!(matches!(err, ExtractError::OutputWriteFailed { .. }));
    }
}
