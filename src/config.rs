//! Configuration for document extraction.
//!
//! Every knob lives in [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. The defaults reproduce the canonical output
//! layout (`extracted/<name>/content.md`, 2× page renders) so most callers
//! never touch the builder.

use crate::error::ExtractError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::{Component, Path};

/// Smallest accepted zoom factor.
pub const MIN_ZOOM: f32 = 0.1;
/// Largest accepted zoom factor.
pub const MAX_ZOOM: f32 = 8.0;

/// Configuration for extracting PDFs into Markdown bundles.
///
/// # Example
/// ```rust
/// use pdf2md_extract::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .zoom(3.0)
///     .output_root("bundles")
///     .build()
///     .unwrap();
/// assert_eq!(config.zoom, 3.0);
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Linear scale applied to the page's point size when rasterising. Default: 2.0.
    ///
    /// Applied uniformly to both axes: a 612 × 792 pt Letter page renders to
    /// 1224 × 1584 px at the default.
    pub zoom: f32,

    /// Name of the directory, created next to the source PDFs, that holds
    /// one bundle per document. Default: `extracted`.
    pub output_root: String,

    /// File name of the Markdown document inside each bundle. Default: `content.md`.
    pub markdown_file_name: String,

    /// Convert the CRLF / CR line breaks PDFium emits into LF. Default: true.
    pub normalize_line_endings: bool,

    /// Receives batch, document and page events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            zoom: 2.0,
            output_root: "extracted".to_string(),
            markdown_file_name: "content.md".to_string(),
            normalize_line_endings: true,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("zoom", &self.zoom)
            .field("output_root", &self.output_root)
            .field("markdown_file_name", &self.markdown_file_name)
            .field("normalize_line_endings", &self.normalize_line_endings)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Bundle directory for a document living in `source_dir`.
    pub fn bundle_dir(&self, source_dir: &Path, base_name: &str) -> std::path::PathBuf {
        source_dir.join(&self.output_root).join(base_name)
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.config.zoom = zoom;
        self
    }

    pub fn output_root(mut self, name: impl Into<String>) -> Self {
        self.config.output_root = name.into();
        self
    }

    pub fn markdown_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.markdown_file_name = name.into();
        self
    }

    pub fn normalize_line_endings(mut self, v: bool) -> Self {
        self.config.normalize_line_endings = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if !c.zoom.is_finite() || c.zoom < MIN_ZOOM || c.zoom > MAX_ZOOM {
            return Err(ExtractError::InvalidConfig(format!(
                "zoom must be {MIN_ZOOM}–{MAX_ZOOM}, got {}",
                c.zoom
            )));
        }
        if !is_single_component(&c.output_root) {
            return Err(ExtractError::InvalidConfig(format!(
                "output root must be a single directory name, got '{}'",
                c.output_root
            )));
        }
        if !is_single_component(&c.markdown_file_name) {
            return Err(ExtractError::InvalidConfig(format!(
                "markdown file name must be a plain file name, got '{}'",
                c.markdown_file_name
            )));
        }
        Ok(self.config)
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_layout() {
        let c = ExtractionConfig::default();
        assert_eq!(c.zoom, 2.0);
        assert_eq!(c.output_root, "extracted");
        assert_eq!(c.markdown_file_name, "content.md");
        assert!(c.normalize_line_endings);
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_accepts_valid_values() {
        let c = ExtractionConfig::builder()
            .zoom(1.5)
            .output_root("bundles")
            .markdown_file_name("index.md")
            .normalize_line_endings(false)
            .build()
            .expect("valid config");
        assert_eq!(c.zoom, 1.5);
        assert_eq!(c.output_root, "bundles");
        assert_eq!(c.markdown_file_name, "index.md");
        assert!(!c.normalize_line_endings);
    }

    #[test]
    fn builder_rejects_out_of_range_zoom() {
        for zoom in [0.0, -2.0, 8.5, f32::NAN, f32::INFINITY] {
            let err = ExtractionConfig::builder().zoom(zoom).build().unwrap_err();
            assert!(
                matches!(err, ExtractError::InvalidConfig(_)),
                "zoom {zoom} should be rejected"
            );
        }
    }

    #[test]
    fn builder_rejects_nested_or_empty_names() {
        assert!(ExtractionConfig::builder().output_root("").build().is_err());
        assert!(ExtractionConfig::builder()
            .output_root("a/b")
            .build()
            .is_err());
        assert!(ExtractionConfig::builder()
            .output_root("..")
            .build()
            .is_err());
        assert!(ExtractionConfig::builder()
            .markdown_file_name("/etc/content.md")
            .build()
            .is_err());
    }

    #[test]
    fn bundle_dir_joins_root_and_base_name() {
        let c = ExtractionConfig::default();
        assert_eq!(
            c.bundle_dir(Path::new("/docs"), "report"),
            Path::new("/docs/extracted/report")
        );
    }

    #[test]
    fn debug_hides_callback() {
        let s = format!("{:?}", ExtractionConfig::default());
        assert!(s.contains("zoom"));
        assert!(s.contains("progress_callback: None"));
    }
}
