pub mod pdftotext;

use crate::error::PackmatchError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PackmatchError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join the pages into one line stream, page order then line order.
pub fn flatten_lines(pages: &[PageContent]) -> Vec<&str> {
    pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect()
}

/// Split a plain text dump into pages on form feeds, then into lines.
pub fn pages_from_text(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_from_text_splits_on_form_feed() {
        let pages = pages_from_text("a\nb\n\x0cc\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines, vec!["a", "b"]);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].lines, vec!["c"]);
    }

    #[test]
    fn test_flatten_keeps_order_across_pages() {
        let pages = pages_from_text("XY9988\n5\n\x0c12.50\n");
        assert_eq!(flatten_lines(&pages), vec!["XY9988", "5", "12.50"]);
    }

    #[test]
    fn test_empty_text_gives_one_empty_page() {
        let pages = pages_from_text("");
        assert_eq!(pages.len(), 1);
        assert!(flatten_lines(&pages).is_empty());
    }
}
