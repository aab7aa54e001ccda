//! Plain-text extraction for a single page.
//!
//! Reading order is whatever pdfium's text page produces; no layout
//! reconstruction is attempted.

use crate::error::ExtractError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Extract the plain text of `page`.
///
/// `page_num` is 1-indexed and only used for error reporting. When
/// `normalize` is set, CRLF and lone CR line breaks become LF.
pub fn extract_text(page: &PdfPage, page_num: usize, normalize: bool) -> Result<String, ExtractError> {
    let text_page = page.text().map_err(|e| ExtractError::TextExtractionFailed {
        page: page_num,
        detail: format!("{:?}", e),
    })?;

    let raw = text_page.all();
    debug!("Page {}: {} chars of text", page_num, raw.chars().count());

    Ok(if normalize {
        normalize_line_endings(&raw)
    } else {
        raw
    })
}

/// Replace `\r\n` and lone `\r` with `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
