//! Stopword lists
//!
//! Language lists come from the `stop-words` crate; user-supplied terms are
//! merged on top with set-union semantics.

use crate::types::Language;
use rustc_hash::FxHashSet;
use stop_words::LANGUAGE;

/// A set of lowercase stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty filter
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the stopword list for a language.
    ///
    /// Returns `None` when no list is available for the language.
    pub fn for_language(language: Language) -> Option<Self> {
        let list = match language {
            Language::English => stop_words::get(LANGUAGE::English),
            Language::Indonesian => stop_words::get(LANGUAGE::Indonesian),
            Language::Other => return None,
        };

        let words: FxHashSet<String> = list
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Build a filter from explicit words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Add words (trimmed and lowercased); blanks are ignored
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// Merge a comma-separated list of extra stopwords
    pub fn extend_from_csv(&mut self, csv: &str) {
        self.extend(csv.split(','));
    }

    /// Add every word of another filter
    pub fn merge(&mut self, other: &StopwordFilter) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Check whether a lowercase word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
