//! Document intake
//!
//! Plain text is pulled out of an uploaded document through the
//! [`TextExtractor`] seam and combined with any pasted text.

use crate::errors::{Result, WordGraphError};

/// Extracts plain text from a binary document
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// PDF text extraction backed by `lopdf`
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[cfg(feature = "pdf")]
impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "pdf")]
impl TextExtractor for PdfTextExtractor {
    /// Text of every page in page order, one page per line block.
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let document = lopdf::Document::load_mem(bytes).map_err(|e| {
            WordGraphError::extraction_failure(format!("failed to load PDF: {}", e))
        })?;

        let pages = document
            .get_pages()
            .into_keys()
            .map(|page_number| (page_number, document.extract_text(&[page_number])));
        let text = join_pages(pages)?;

        tracing::debug!(bytes = bytes.len(), chars = text.len(), "extracted document text");
        Ok(text)
    }
}

/// Join per-page extraction results with newlines.
///
/// Pages that fail to decode are logged and skipped, as are pages without
/// text. Only a document where every page failed is an error.
#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
fn join_pages<I, E>(pages: I) -> Result<String>
where
    I: IntoIterator<Item = (u32, std::result::Result<String, E>)>,
    E: std::fmt::Display,
{
    let mut texts = Vec::new();
    let mut failed = 0usize;
    let mut last_error = None;

    for (page_number, result) in pages {
        match result {
            Ok(text) if text.trim().is_empty() => {}
            Ok(text) => texts.push(text),
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "skipping undecodable page");
                failed += 1;
                last_error = Some(format!("page {}: {}", page_number, e));
            }
        }
    }

    match last_error {
        Some(error) if texts.is_empty() => Err(WordGraphError::extraction_failure(format!(
            "no page could be decoded ({} failed, last {})",
            failed, error
        ))),
        _ => Ok(texts.join("\n")),
    }
}

/// What the user submitted: an optional document and optional pasted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInput {
    pub document: Option<Vec<u8>>,
    pub pasted_text: String,
}

impl DocumentInput {
    /// Pasted text only
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            document: None,
            pasted_text: text.into(),
        }
    }

    /// Uploaded document only
    pub fn from_document(bytes: Vec<u8>) -> Self {
        Self {
            document: Some(bytes),
            pasted_text: String::new(),
        }
    }

    pub fn with_pasted_text(mut self, text: impl Into<String>) -> Self {
        self.pasted_text = text.into();
        self
    }

    /// Raw text to analyze: the document's text followed by the pasted text.
    ///
    /// A document that cannot be read is an error; no input at all yields an
    /// empty string.
    pub fn assemble_text(&self, extractor: &dyn TextExtractor) -> Result<String> {
        let mut text = match &self.document {
            Some(bytes) => extractor.extract_text(bytes)?,
            None => String::new(),
        };

        if !self.pasted_text.trim().is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&self.pasted_text);
        }
        Ok(text)
    }
}
