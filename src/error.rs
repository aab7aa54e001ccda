//! Error types for the pdf2md-extract library.
//!
//! A single enum, [`ExtractError`], covers every failure. What matters to the
//! caller is *where* an error is allowed to stop the program, so each variant
//! maps to an [`ErrorClass`]:
//!
//! * [`ErrorClass::DependencyMissing`] — the PDFium library could not be
//!   bound. Nothing else can run; the binary exits non-zero.
//! * [`ErrorClass::Open`] / [`ErrorClass::Write`] / [`ErrorClass::Page`] —
//!   one document failed. The batch driver records the error in a
//!   [`crate::output::DocumentOutcome`] and moves on to the next file.
//! * [`ErrorClass::Setup`] — the batch itself cannot start (unreadable input
//!   directory, invalid configuration).

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2md-extract library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Engine errors ─────────────────────────────────────────────────────
    /// Could not bind to a PDFium library.
    #[error(
        "PDFium library not available: {0}\n\n\
You can:\n\
  • Place libpdfium next to the executable or in the current directory.\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium to use an existing copy.\n\
  • Install pdfium system-wide so the dynamic loader can find it.\n"
    )]
    DependencyMissing(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// The file could not be read or PDFium refused to load it.
    #[error("Cannot open PDF '{path}': {detail}")]
    OpenFailed { path: PathBuf, detail: String },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}' (first bytes: {magic:?})")]
    NotAPdf { path: PathBuf, magic: Vec<u8> },

    // ── Page errors ───────────────────────────────────────────────────────
    /// PDFium could not build the text page for a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    /// PDFium returned an error while rasterising a page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The output bundle directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write a Markdown or image file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding of a rendered page failed.
    #[error("Failed to encode page image '{path}': {detail}")]
    ImageEncodeFailed { path: PathBuf, detail: String },

    // ── Setup errors ──────────────────────────────────────────────────────
    /// The input directory could not be listed.
    #[error("Cannot scan directory '{path}': {source}")]
    DirectoryScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    DependencyMissing,
    Open,
    Write,
    Page,
    Setup,
}

impl ExtractError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ExtractError::DependencyMissing(_) => ErrorClass::DependencyMissing,
            ExtractError::OpenFailed { .. } | ExtractError::NotAPdf { .. } => ErrorClass::Open,
            ExtractError::TextExtractionFailed { .. } | ExtractError::RenderFailed { .. } => {
                ErrorClass::Page
            }
            ExtractError::OutputDirFailed { .. }
            | ExtractError::OutputWriteFailed { .. }
            | ExtractError::ImageEncodeFailed { .. } => ErrorClass::Write,
            ExtractError::DirectoryScanFailed { .. } | ExtractError::InvalidConfig(_) => {
                ErrorClass::Setup
            }
        }
    }

    /// Whether the batch driver may record this error and keep going.
    pub fn is_document_local(&self) -> bool {
        matches!(
            self.class(),
            ErrorClass::Open | ErrorClass::Write | ErrorClass::Page
        )
    }
}
