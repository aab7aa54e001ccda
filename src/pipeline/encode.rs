//! Image output: write a rendered page to disk as PNG.
//!
//! PNG is lossless, so rendered text stays crisp in the bundle. The image is
//! encoded into memory first so that encoder failures and filesystem failures
//! surface as distinct errors.

use crate::error::ExtractError;
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Encode `img` as PNG bytes.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}

/// Encode `img` as PNG and write it to `path`, replacing any existing file.
pub fn write_png(img: &DynamicImage, path: &Path) -> Result<(), ExtractError> {
    let bytes = encode_png(img).map_err(|e| ExtractError::ImageEncodeFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    std::fs::write(path, &bytes).map_err(|e| ExtractError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
