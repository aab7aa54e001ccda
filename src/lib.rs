//! # pdf2md-extract
//!
//! Batch-convert the PDFs in a directory into Markdown bundles.
//!
//! For each `<name>.pdf` the library writes:
//!
//! ```text
//! <dir>/extracted/<name>/content.md
//! <dir>/extracted/<name>/<name>_page_001.png
//! <dir>/extracted/<name>/<name>_page_002.png
//! ...
//! ```
//!
//! `content.md` holds a `# <name>` title, then for every page a `## Page N`
//! heading, the page's plain text as extracted by PDFium, and a relative
//! link to the page rendered at twice its native point size.
//!
//! ## Pipeline Overview
//!
//! ```text
//! directory
//!  │
//!  ├─ 1. Bind    locate and load libpdfium once        (engine)
//!  ├─ 2. Scan    *.pdf, case-insensitive, sorted       (pipeline::scan)
//!  └─ 3. For each document, sequentially               (batch)
//!        ├─ validate %PDF header and open              (pipeline::input, render)
//!        ├─ per page: text + 2× PNG render             (pipeline::text, render, encode)
//!        └─ write content.md                           (pipeline::markdown, extract)
//! ```
//!
//! A failing document is recorded in the [`BatchReport`] and the batch moves
//! on; only a missing PDFium library stops the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2md_extract::{extract_directory, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = extract_directory("./papers", &ExtractionConfig::default())?;
//!     eprintln!(
//!         "{}/{} documents, {} pages",
//!         report.succeeded(),
//!         report.discovered,
//!         report.total_pages()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2md-extract` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{extract_directory, run_batch, run_batch_with};
pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use engine::{EngineSource, PdfEngine};
pub use error::{ErrorClass, ExtractError};
pub use extract::{extract_document, DocumentExtractor, PdfExtractor};
pub use output::{BatchReport, DocumentOutcome, DocumentReport, FailedDocument};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
