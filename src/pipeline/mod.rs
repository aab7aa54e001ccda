//! Pipeline stages for turning one PDF into a bundle.
//!
//! Each submodule implements exactly one step so it can be tested on its own.
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ input ──▶ render::open ──┬─▶ text ─────────┐
//! (dir)    (%PDF)    (pdfium)       └─▶ render ─▶ encode ─▶ markdown
//! ```
//!
//! 1. [`scan`]     — list `*.pdf` files in a directory, derive base names
//! 2. [`input`]    — reject files that are not PDFs before pdfium sees them
//! 3. [`render`]   — open the document and rasterise pages at the zoom factor
//! 4. [`text`]     — pull the plain text of a page
//! 5. [`encode`]   — write a rendered page as PNG
//! 6. [`markdown`] — assemble `content.md` and name the page images

pub mod encode;
pub mod input;
pub mod markdown;
pub mod render;
pub mod scan;
pub mod text;
