//! Markdown assembly for `content.md` and page-image naming.
//!
//! Output layout:
//!
//! ```text
//! # <name>
//!
//! ## Page 1
//!
//! <text of page 1>
//!
//! ![Page 1](<name>_page_001.png)
//!
//! ## Page 2
//! ...
//! ```
//!
//! Headings carry the plain page number; image file names carry it padded to
//! three digits. Pages past 999 simply widen the number (`_page_1000.png`),
//! which no longer sorts lexicographically after `_page_999.png`.

/// File name of the rendered image for `page_num` (1-indexed).
pub fn page_image_name(base_name: &str, page_num: usize) -> String {
    format!("{base_name}_page_{page_num:03}.png")
}

/// Link destination for an image file name.
///
/// CommonMark ends a bare destination at whitespace and requires parentheses
/// to balance, so such names are wrapped in `<…>`.
fn link_destination(file_name: &str) -> String {
    if file_name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>'))
    {
        format!("<{}>", file_name.replace('<', "%3C").replace('>', "%3E"))
    } else {
        file_name.to_string()
    }
}

/// Accumulates the Markdown for one document, page by page.
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    content: String,
    pages: usize,
}

impl MarkdownDocument {
    /// Start a document titled with the base name.
    pub fn new(title: &str) -> Self {
        Self {
            content: format!("# {title}\n\n"),
            pages: 0,
        }
    }

    /// Append the section for one page: heading, raw text, image reference.
    pub fn push_page(&mut self, page_num: usize, text: &str, image_file_name: &str) {
        self.content
            .push_str(&format!("## Page {page_num}\n\n{text}\n\n"));
        self.content.push_str(&format!(
            "![Page {page_num}]({})\n\n",
            link_destination(image_file_name)
        ));
        self.pages += 1;
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}
