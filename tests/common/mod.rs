//! Shared helpers for the integration tests.
//!
//! PDFs are generated on the fly: each page is a blank MediaBox with one line
//! of Helvetica text, which is enough for pdfium to extract and render.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

static PDFIUM_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that bind PDFium: every engine initialises and tears down
/// the library, so two must never be alive at once.
pub fn pdfium_lock() -> MutexGuard<'static, ()> {
    PDFIUM_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Bind PDFium or skip the current test. Hold [`pdfium_lock`] first.
macro_rules! engine_or_skip {
    () => {{
        match pdf2md_extract::PdfEngine::bind() {
            Ok(engine) => engine,
            Err(e) => {
                println!("SKIP — PDFium not available: {}", e.to_string().lines().next().unwrap_or(""));
                println!("       Set PDFIUM_LIB_PATH=/path/to/libpdfium to run this test");
                return;
            }
        }
    }};
}

/// One page of a generated PDF.
pub struct TestPage<'a> {
    pub width: f32,
    pub height: f32,
    pub text: &'a str,
}

impl<'a> TestPage<'a> {
    pub fn letter(text: &'a str) -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            text,
        }
    }
}

/// Build a minimal, well-formed PDF with a correct cross-reference table.
pub fn build_pdf(pages: &[TestPage<'_>]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    for (i, page) in pages.iter().enumerate() {
        let content_id = 5 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page.width, page.height, content_id
        ));
        let stream = format!(
            "BT /F1 18 Tf 72 {} Td ({}) Tj ET",
            page.height - 100.0,
            page.text
        );
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for off in offsets {
        out.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}

/// Write a generated PDF with `n` Letter pages reading "Hello from page N".
pub fn write_letter_pdf(path: &Path, n: usize) {
    let texts: Vec<String> = (1..=n).map(|i| format!("Hello from page {i}")).collect();
    let pages: Vec<TestPage<'_>> = texts.iter().map(|t| TestPage::letter(t)).collect();
    std::fs::write(path, build_pdf(&pages)).expect("write test pdf");
}
