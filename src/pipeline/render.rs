//! PDF loading and page rasterisation via pdfium.
//!
//! Pages are rendered by scaling the page's native point size by the zoom
//! factor on both axes, so at the default zoom of 2.0 a US Letter page
//! (612 × 792 pt) becomes a 1224 × 1584 px bitmap.

use crate::engine::PdfEngine;
use crate::error::ExtractError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Open a PDF with the bound engine.
///
/// The returned document borrows the engine and is closed when dropped.
pub fn open_document<'a>(
    engine: &'a PdfEngine,
    pdf_path: &Path,
) -> Result<PdfDocument<'a>, ExtractError> {
    let document = engine
        .pdfium()
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| ExtractError::OpenFailed {
            path: pdf_path.to_path_buf(),
            detail: format!("{:?}", e),
        })?;

    info!(
        "PDF loaded: {} ({} pages)",
        pdf_path.display(),
        document.pages().len()
    );
    Ok(document)
}

/// Pixel size of a page rendered at `zoom`, rounded to the nearest pixel.
pub fn scaled_size(width_pt: f32, height_pt: f32, zoom: f32) -> (u32, u32) {
    (
        (width_pt * zoom).round().max(1.0) as u32,
        (height_pt * zoom).round().max(1.0) as u32,
    )
}

/// Rasterise one page at `zoom` × its native point size.
///
/// `page_num` is 1-indexed and only used for error reporting.
pub fn render_page(
    page: &PdfPage,
    page_num: usize,
    zoom: f32,
) -> Result<DynamicImage, ExtractError> {
    let (expected_w, expected_h) = scaled_size(page.width().value, page.height().value, zoom);

    let render_config = PdfRenderConfig::new()
        .set_target_width(expected_w as i32)
        .set_target_height(expected_h as i32);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| ExtractError::RenderFailed {
            page: page_num,
            detail: format!("{:?}", e),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px (zoom {})",
        page_num,
        image.width(),
        image.height(),
        zoom
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_page_doubles() {
        assert_eq!(scaled_size(612.0, 792.0, 2.0), (1224, 1584));
    }

    #[test]
    fn a4_page_doubles_with_rounding() {
        // A4 is 595.28 × 841.89 pt
        assert_eq!(scaled_size(595.28, 841.89, 2.0), (1191, 1684));
    }

    #[test]
    fn tiny_pages_never_collapse_to_zero() {
        assert_eq!(scaled_size(0.2, 0.2, 0.1), (1, 1));
    }

    #[test]
    fn zoom_one_is_identity() {
        assert_eq!(scaled_size(300.0, 400.0, 1.0), (300, 400));
    }
}
