//! Input validation: refuse files that are not PDFs before pdfium opens them.
//!
//! A misnamed `.pdf` (an HTML error page, a ZIP, an empty download) would
//! otherwise surface as an opaque pdfium format error. Checking the `%PDF`
//! header first gives the report a clearer message.

use crate::error::ExtractError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const PDF_MAGIC: &[u8; 5] = b"%PDF-";

/// pdfium accepts a header anywhere in the first 1 KiB (BOMs, stray
/// newlines, mail or HTTP prefixes).
const HEADER_WINDOW: u64 = 1024;

/// Leading bytes kept in [`ExtractError::NotAPdf`] for the report.
const REPORTED_BYTES: usize = 4;

/// Check that `path` is a readable file with a PDF header near its start.
pub fn validate_pdf(path: &Path) -> Result<(), ExtractError> {
    let open_err = |e: std::io::Error| ExtractError::OpenFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    };

    let mut file = std::fs::File::open(path).map_err(open_err)?;
    let mut head = Vec::with_capacity(HEADER_WINDOW as usize);
    file.by_ref()
        .take(HEADER_WINDOW)
        .read_to_end(&mut head)
        .map_err(open_err)?;

    match find_header(&head) {
        Some(0) => {}
        Some(offset) => debug!("PDF header at byte {offset}: {}", path.display()),
        None => {
            head.truncate(REPORTED_BYTES);
            return Err(ExtractError::NotAPdf {
                path: path.to_path_buf(),
                magic: head,
            });
        }
    }

    debug!("Validated PDF header: {}", path.display());
    Ok(())
}

fn find_header(head: &[u8]) -> Option<usize> {
    head.windows(PDF_MAGIC.len()).position(|w| w == PDF_MAGIC)
}
