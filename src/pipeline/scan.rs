//! Directory scan: find the PDFs a batch will process.
//!
//! Only regular files directly inside the directory are considered; the
//! name suffix match is case-insensitive (`a.pdf`, `B.PDF`, `c.Pdf`). Results
//! are sorted by file name so repeated runs visit documents in the same order.

use crate::error::ExtractError;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_SUFFIX: &[u8] = b".pdf";

/// Whether the file name of `path` ends in `.pdf`, ignoring case.
///
/// Matches on the name rather than [`Path::extension`], so a file called
/// just `.pdf` is included too.
pub fn has_pdf_extension(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    name.len() >= PDF_SUFFIX.len()
        && name[name.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}

/// List the PDF files directly inside `dir`, sorted by file name.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let scan_err = |source| ExtractError::DirectoryScanFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let path = entry.path();
        if !has_pdf_extension(&path) {
            continue;
        }
        // Follows symlinks: a link to a PDF counts, a directory named x.pdf does not.
        if !path.is_file() {
            debug!("Skipping non-file {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Discovered {} PDF files in {}", files.len(), dir.display());
    Ok(files)
}

/// File name without directory and extension.
///
/// `docs/Annual Report.v2.pdf` → `Annual Report.v2`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
