//! PDF processing module.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text sources.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text per page, in page order.
    fn extract_pages(&self) -> Result<Vec<String>>;
}

/// True when `bytes` start with the `%PDF` magic (after an optional BOM or whitespace).
pub fn is_pdf_magic(bytes: &[u8]) -> bool {
    let trimmed: Vec<u8> = bytes
        .iter()
        .skip_while(|&&b| b == 0xEF || b == 0xBB || b == 0xBF || b.is_ascii_whitespace())
        .take(4)
        .copied()
        .collect();

    trimmed.starts_with(b"%PDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_detection() {
        assert!(is_pdf_magic(b"%PDF-1.4"));
        assert!(is_pdf_magic(b"\xEF\xBB\xBF%PDF-1.7"));
        assert!(is_pdf_magic(b"  %PDF-1.5"));
        assert!(!is_pdf_magic(b"date,description,debit"));
        assert!(!is_pdf_magic(b""));
    }
}
