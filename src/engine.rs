//! PDFium binding: the one capability every extraction borrows.
//!
//! PDFium is a shared library loaded at runtime. [`PdfEngine::bind`] is the
//! explicit initialisation step: it locates the library, binds it, and returns
//! a handle that the batch driver lends to each document extraction. Failure
//! here is the only error that stops the program
//! ([`ExtractError::DependencyMissing`]).
//!
//! Lookup order (first match wins):
//!
//! 1. `PDFIUM_LIB_PATH` — explicit path to the library file.
//! 2. The platform library name next to the running executable.
//! 3. The platform library name in the current directory.
//! 4. The system dynamic-loader search path.

use crate::error::ExtractError;
use pdfium_render::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit PDFium library file.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Where the bound PDFium library came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSource {
    /// `PDFIUM_LIB_PATH` pointed at this file.
    EnvOverride(PathBuf),
    /// Found next to the executable or in the working directory.
    Local(PathBuf),
    /// Resolved by the system dynamic loader.
    System,
}

impl fmt::Display for EngineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSource::EnvOverride(p) => write!(f, "{} ({PDFIUM_LIB_PATH_ENV})", p.display()),
            EngineSource::Local(p) => write!(f, "{}", p.display()),
            EngineSource::System => write!(f, "system library"),
        }
    }
}

/// A bound PDFium library.
pub struct PdfEngine {
    pdfium: Pdfium,
    source: EngineSource,
}

impl fmt::Debug for PdfEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfEngine")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl PdfEngine {
    /// Locate and bind PDFium using the lookup order described in the module docs.
    pub fn bind() -> Result<Self, ExtractError> {
        let env_path = std::env::var(PDFIUM_LIB_PATH_ENV).ok();
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().ok();

        let mut failures = Vec::new();

        for candidate in candidate_paths(env_path.as_deref(), exe_dir.as_deref(), cwd.as_deref()) {
            let path = candidate.path().to_path_buf();
            if !path.exists() {
                debug!("No PDFium library at {}", path.display());
                if let Candidate::Env(_) = candidate {
                    failures.push(format!("{PDFIUM_LIB_PATH_ENV}={} does not exist", path.display()));
                }
                continue;
            }
            match Pdfium::bind_to_library(&path) {
                Ok(bindings) => {
                    let source = match candidate {
                        Candidate::Env(p) => EngineSource::EnvOverride(p),
                        Candidate::Local(p) => EngineSource::Local(p),
                    };
                    return Ok(Self::from_bindings(bindings, source));
                }
                Err(e) => failures.push(format!("{}: {e}", path.display())),
            }
        }

        match Pdfium::bind_to_system_library() {
            Ok(bindings) => Ok(Self::from_bindings(bindings, EngineSource::System)),
            Err(e) => {
                failures.push(format!("system library: {e}"));
                Err(ExtractError::DependencyMissing(failures.join("; ")))
            }
        }
    }

    /// Bind to a PDFium library at an explicit `path`, skipping the lookup.
    pub fn bind_from_path(path: &Path) -> Result<Self, ExtractError> {
        Pdfium::bind_to_library(path)
            .map(|bindings| Self::from_bindings(bindings, EngineSource::Local(path.to_path_buf())))
            .map_err(|e| ExtractError::DependencyMissing(format!("{}: {e}", path.display())))
    }

    fn from_bindings(bindings: Box<dyn PdfiumLibraryBindings>, source: EngineSource) -> Self {
        info!("PDFium bound from {}", source);
        Self {
            pdfium: Pdfium::new(bindings),
            source,
        }
    }

    pub fn pdfium(&self) -> &Pdfium {
        &self.pdfium
    }

    pub fn source(&self) -> &EngineSource {
        &self.source
    }

    /// One-line confirmation suitable for the startup banner.
    pub fn describe(&self) -> String {
        banner(&self.source)
    }
}

/// Binding API level this crate is built against. The loaded libpdfium does
/// not report its own build number through these bindings.
const PDFIUM_RENDER_API: &str = "0.8";

fn banner(source: &EngineSource) -> String {
    format!(
        "PDFium engine ready (pdfium-render {PDFIUM_RENDER_API}, pdf2md-extract {}, {source})",
        env!("CARGO_PKG_VERSION")
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Candidate {
    Env(PathBuf),
    Local(PathBuf),
}

impl Candidate {
    fn path(&self) -> &Path {
        match self {
            Candidate::Env(p) | Candidate::Local(p) => p,
        }
    }
}

fn candidate_paths(env_path: Option<&str>, exe_dir: Option<&Path>, cwd: Option<&Path>) -> Vec<Candidate> {
    let mut out = Vec::new();
    if let Some(p) = env_path.filter(|p| !p.is_empty()) {
        out.push(Candidate::Env(PathBuf::from(p)));
    }
    for dir in [exe_dir, cwd].into_iter().flatten() {
        let lib = Pdfium::pdfium_platform_library_name_at_path(dir);
        if !out.iter().any(|c| c.path() == lib.as_path()) {
            out.push(Candidate::Local(lib));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_comes_first() {
        let c = candidate_paths(
            Some("/opt/pdfium/libpdfium.so"),
            Some(Path::new("/usr/local/bin")),
            Some(Path::new("/work")),
        );
        assert_eq!(c.len(), 3);
        assert_eq!(c[0], Candidate::Env(PathBuf::from("/opt/pdfium/libpdfium.so")));
        assert!(c[1].path().starts_with("/usr/local/bin"));
        assert!(c[2].path().starts_with("/work"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let c = candidate_paths(Some(""), None, Some(Path::new("/work")));
        assert_eq!(c.len(), 1);
        assert!(matches!(c[0], Candidate::Local(_)));
    }

    #[test]
    fn duplicate_directories_collapse() {
        let dir = Path::new("/same");
        let c = candidate_paths(None, Some(dir), Some(dir));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn source_display() {
        let s = EngineSource::EnvOverride(PathBuf::from("/x/libpdfium.so")).to_string();
        assert!(s.contains(PDFIUM_LIB_PATH_ENV));
        assert_eq!(EngineSource::System.to_string(), "system library");
    }

    #[test]
    fn banner_names_versions_and_source() {
        let b = banner(&EngineSource::System);
        assert!(b.starts_with("PDFium engine ready (pdfium-render 0.8"), "got: {b}");
        assert!(b.contains(env!("CARGO_PKG_VERSION")));
        assert!(b.ends_with("system library)"));
    }

    #[test]
    fn missing_library_file_is_dependency_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfEngine::bind_from_path(&dir.path().join("libpdfium-missing.so")).unwrap_err();
        assert_eq!(err.class(), crate::error::ErrorClass::DependencyMissing);
        assert!(err.to_string().contains("libpdfium-missing.so"));
    }
}
