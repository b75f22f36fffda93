//! PDF document parser using pdf-extract
//!
//! Extracts text content from PDF files, preserving page order. No layout
//! or structural metadata is retained; downstream stages only need the raw
//! text stream.

use crate::{DocumentParser, FileType, ParsedDocument, ParserError, Result};

/// PDF document parser
pub struct PdfParser;

impl PdfParser {
    /// Create a new PDF parser
    pub fn new() -> Self {
        Self
    }

    /// Extract text from PDF bytes
    fn extract_text(&self, file_name: &str, bytes: &[u8]) -> Result<(String, Option<u32>)> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| classify_pdf_error(file_name, e))?;

        // Rough page count estimate based on form feed characters
        let page_count = text.matches('\x0C').count() as u32;
        let page_count = if page_count > 0 {
            Some(page_count + 1)
        } else {
            None
        };

        Ok((text, page_count))
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for PdfParser {
    fn parse_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<ParsedDocument> {
        let (text, page_count) = self.extract_text(file_name, bytes)?;

        if text.trim().is_empty() {
            return Err(ParserError::EmptyDocument(file_name.to_string()));
        }

        let mut doc = ParsedDocument::new(file_name, FileType::Pdf).with_content(text);
        doc.page_count = page_count;

        Ok(doc)
    }

    fn supported_types(&self) -> &[FileType] {
        &[FileType::Pdf]
    }
}

/// Map pdf-extract failures onto typed parser errors.
///
/// pdf-extract reports encryption and structural damage only through its
/// error display text, so classification goes by message content.
fn classify_pdf_error(file_name: &str, err: pdf_extract::OutputError) -> ParserError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("encrypt") || lowered.contains("password") {
        ParserError::EncryptedFile(file_name.to_string())
    } else if lowered.contains("malformed") || lowered.contains("invalid file header") {
        ParserError::CorruptedFile(file_name.to_string())
    } else {
        ParserError::PdfError(message)
    }
}
