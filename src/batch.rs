//! Batch driver: run the extractor over every PDF in a directory.
//!
//! Documents are processed one at a time, in file-name order. A document that
//! fails is recorded as [`DocumentOutcome::Failed`] and the loop moves on;
//! only a directory that cannot be listed stops the batch.

use crate::config::ExtractionConfig;
use crate::engine::PdfEngine;
use crate::error::ExtractError;
use crate::extract::{DocumentExtractor, PdfExtractor};
use crate::output::{BatchReport, DocumentOutcome, FailedDocument};
use crate::pipeline::scan;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Bind PDFium and extract every PDF in `dir`.
///
/// # Errors
/// - [`ExtractError::DependencyMissing`] when PDFium cannot be bound
/// - [`ExtractError::DirectoryScanFailed`] when `dir` cannot be listed
///
/// Per-document failures are reported inside the returned [`BatchReport`].
pub fn extract_directory(
    dir: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<BatchReport, ExtractError> {
    let engine = PdfEngine::bind()?;
    run_batch(&engine, dir.as_ref(), config)
}

/// Extract every PDF in `dir` with an already-bound engine.
pub fn run_batch(
    engine: &PdfEngine,
    dir: &Path,
    config: &ExtractionConfig,
) -> Result<BatchReport, ExtractError> {
    let extractor = PdfExtractor::new(engine, config);
    run_batch_with(&extractor, dir, config)
}

/// Drive `extractor` over every PDF in `dir`.
pub fn run_batch_with<E: DocumentExtractor + ?Sized>(
    extractor: &E,
    dir: &Path,
    config: &ExtractionConfig,
) -> Result<BatchReport, ExtractError> {
    let start = Instant::now();
    let files = scan::discover_pdfs(dir)?;
    let total = files.len();
    info!("Found {} PDF files in {}", total, dir.display());

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(total);
    }

    let mut report = BatchReport::empty(dir.to_path_buf());
    report.discovered = total;

    for (i, path) in files.iter().enumerate() {
        let index = i + 1;
        let name = scan::base_name(path);

        if let Some(ref cb) = config.progress_callback {
            cb.on_document_start(index, total, &name);
        }

        match extractor.extract(path) {
            Ok(doc) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_document_complete(index, total, &doc);
                }
                report.outcomes.push(DocumentOutcome::Extracted(doc));
            }
            Err(e) => {
                warn!("Failed to extract {}: {}", path.display(), e);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_document_error(index, total, path, &e);
                }
                report
                    .outcomes
                    .push(DocumentOutcome::Failed(FailedDocument::new(path.clone(), &e)));
            }
        }
    }

    info!(
        "Batch complete: {}/{} documents, {} pages, {}ms",
        report.succeeded(),
        total,
        report.total_pages(),
        start.elapsed().as_millis()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(&report);
    }

    Ok(report)
}
