//! Result types produced by the extractor and the batch driver.
//!
//! Everything here derives `Serialize` so the CLI can emit a batch summary as
//! JSON with `--json`.

use crate::error::{ErrorClass, ExtractError};
use serde::Serialize;
use std::path::PathBuf;

/// What one successful document extraction produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    /// Base name of the source file (file name without extension).
    pub name: String,
    /// Path of the source PDF.
    pub source: PathBuf,
    /// The bundle directory.
    pub bundle_dir: PathBuf,
    /// Path of the Markdown file inside the bundle.
    pub markdown_path: PathBuf,
    /// Number of pages processed.
    pub page_count: usize,
    /// Rendered page images, in page order.
    pub images: Vec<PathBuf>,
}

/// A document that could not be extracted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedDocument {
    pub source: PathBuf,
    pub class: ErrorClass,
    pub message: String,
}

impl FailedDocument {
    pub fn new(source: PathBuf, error: &ExtractError) -> Self {
        Self {
            source,
            class: error.class(),
            message: error.to_string(),
        }
    }
}

/// Per-document result recorded by the batch driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Extracted(DocumentReport),
    Failed(FailedDocument),
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DocumentOutcome::Extracted(_))
    }
}

/// Summary of one batch run over a directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// The scanned directory.
    pub directory: PathBuf,
    /// Number of PDF files found by the scan.
    pub discovered: usize,
    /// One entry per discovered file, in processing order.
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    pub fn empty(directory: PathBuf) -> Self {
        Self {
            directory,
            discovered: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Pages processed across every successful document.
    pub fn total_pages(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                DocumentOutcome::Extracted(r) => r.page_count,
                DocumentOutcome::Failed(_) => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, pages: usize) -> DocumentReport {
        DocumentReport {
            name: name.into(),
            source: PathBuf::from(format!("{name}.pdf")),
            bundle_dir: PathBuf::from(format!("extracted/{name}")),
            markdown_path: PathBuf::from(format!("extracted/{name}/content.md")),
            page_count: pages,
            images: Vec::new(),
        }
    }

    #[test]
    fn counts_and_page_totals() {
        let batch = BatchReport {
            directory: PathBuf::from("."),
            discovered: 3,
            outcomes: vec![
                DocumentOutcome::Extracted(report("a", 4)),
                DocumentOutcome::Failed(FailedDocument::new(
                    PathBuf::from("b.pdf"),
                    &ExtractError::OpenFailed {
                        path: PathBuf::from("b.pdf"),
                        detail: "bad xref".into(),
                    },
                )),
                DocumentOutcome::Extracted(report("c", 2)),
            ],
        };
        assert_eq!(batch.succeeded(), 2);
        assert_eq!(batch.failed(), 1);
        assert_eq!(batch.total_pages(), 6);
    }

    #[test]
    fn empty_batch() {
        let batch = BatchReport::empty(PathBuf::from("/tmp"));
        assert_eq!(batch.discovered, 0);
        assert_eq!(batch.succeeded(), 0);
        assert_eq!(batch.failed(), 0);
    }

    #[test]
    fn outcome_serialises_with_status_tag() {
        let failed = DocumentOutcome::Failed(FailedDocument::new(
            PathBuf::from("x.pdf"),
            &ExtractError::NotAPdf {
                path: PathBuf::from("x.pdf"),
                magic: b"GIF8".to_vec(),
            },
        ));
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["class"], "open");

        let ok = DocumentOutcome::Extracted(report("a", 1));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "extracted");
        assert_eq!(json["page_count"], 1);
    }
}
