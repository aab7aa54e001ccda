//! Progress-callback trait for batch, document and page events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::progress_callback`] to receive
//! events as the batch driver walks the directory. The library itself never
//! prints; the CLI turns these events into its console lines.
//!
//! # Example
//!
//! ```rust
//! use pdf2md_extract::{ExtractionConfig, ExtractionProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct PageCounter {
//!     pages: AtomicUsize,
//! }
//!
//! impl ExtractionProgressCallback for PageCounter {
//!     fn on_page_complete(&self, _name: &str, _page_num: usize, _total_pages: usize) {
//!         self.pages.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let counter = Arc::new(PageCounter { pages: AtomicUsize::new(0) });
//! let config = ExtractionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ExtractionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::error::ExtractError;
use crate::output::{BatchReport, DocumentReport};
use std::path::Path;
use std::sync::Arc;

/// Called by the batch driver and the document extractor.
///
/// All methods have no-op defaults so implementors override only what they
/// need. Events arrive strictly in order: documents are processed one at a
/// time and pages in ascending order.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once after the directory scan.
    ///
    /// # Arguments
    /// * `total_documents` — number of PDF files discovered
    fn on_batch_start(&self, total_documents: usize) {
        let _ = total_documents;
    }

    /// Called before a document is opened.
    ///
    /// # Arguments
    /// * `index` — 1-indexed position of the document in the batch
    /// * `total` — number of documents in the batch
    /// * `name`  — base name of the document
    fn on_document_start(&self, index: usize, total: usize, name: &str) {
        let _ = (index, total, name);
    }

    /// Called after a page's text and image have both been produced.
    fn on_page_complete(&self, name: &str, page_num: usize, total_pages: usize) {
        let _ = (name, page_num, total_pages);
    }

    /// Called when a document's bundle has been fully written.
    fn on_document_complete(&self, index: usize, total: usize, report: &DocumentReport) {
        let _ = (index, total, report);
    }

    /// Called when a document failed; the batch continues afterwards.
    fn on_document_error(&self, index: usize, total: usize, path: &Path, error: &ExtractError) {
        let _ = (index, total, path, error);
    }

    /// Called once after every discovered document has been attempted.
    fn on_batch_complete(&self, report: &BatchReport) {
        let _ = report;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ExtractionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;
