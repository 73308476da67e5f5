//! Text normalization
//!
//! Cuts the references/bibliography section off a document and flattens the
//! remaining text to a single line.

use regex::Regex;
use std::sync::OnceLock;

/// Headings that open a references section, in Indonesian, English and French.
///
/// Multi-word markers are matched across any whitespace run so that a heading
/// broken over two lines is found before whitespace is collapsed.
const REFERENCE_MARKERS: &[&str] = &[r"DAFTAR\s+PUSTAKA", "REFERENSI", "References", "Bibliographie"];

fn reference_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        let pattern = format!("(?i)(?:{})", REFERENCE_MARKERS.join("|"));
        Regex::new(&pattern).expect("reference marker pattern is a constant")
    })
}

/// Normalizes raw document text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Truncate at the first reference marker, then collapse whitespace.
    ///
    /// The result is a single line with no leading or trailing whitespace.
    /// Applying `normalize` to its own output returns it unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let body = match reference_marker().find(text) {
            Some(m) => &text[..m.start()],
            None => text,
        };
        collapse_whitespace(body)
    }

    /// Byte offset of the first reference marker, if any
    pub fn references_offset(&self, text: &str) -> Option<usize> {
        reference_marker().find(text).map(|m| m.start())
    }
}

/// Collapse every run of Unicode whitespace into one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`, followed by `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
