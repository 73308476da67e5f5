//! Linguistic resource bundle
//!
//! Everything language-specific the tokenizer needs (word segmenter,
//! stopword list, stemmer) is loaded once into an immutable
//! [`ResourceBundle`] and passed into the pipeline. Availability of each
//! resource is therefore an explicit input: a test can build a bundle
//! without a segmenter or stopword list and assert the fallback path.

use crate::nlp::stemmer::{IndonesianStemmer, WordStemmer};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word segmentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmenter {
    /// UAX #29 word boundaries
    UnicodeWords,
    /// Maximal runs of ASCII letters
    LatinRuns,
}

/// Kinds of linguistic resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Segmenter,
    Stopwords,
    Stemmer,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Segmenter => "word segmenter",
            ResourceKind::Stopwords => "stopword list",
            ResourceKind::Stemmer => "stemmer",
        };
        f.write_str(name)
    }
}

/// A non-fatal notice that a resource was missing and a fallback was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAdvisory {
    pub resource: ResourceKind,
    pub language: Language,
    pub message: String,
}

impl ResourceAdvisory {
    pub fn new(resource: ResourceKind, language: Language, fallback: &str) -> Self {
        Self {
            resource,
            language,
            message: format!(
                "{} unavailable for '{}'; {}",
                resource, language, fallback
            ),
        }
    }
}

impl fmt::Display for ResourceAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Immutable set of linguistic resources for one language
pub struct ResourceBundle {
    language: Language,
    segmenter: Option<Segmenter>,
    stopwords: Option<StopwordFilter>,
    stemmer: Option<Box<dyn WordStemmer>>,
}

impl fmt::Debug for ResourceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBundle")
            .field("language", &self.language)
            .field("segmenter", &self.segmenter)
            .field("stopwords", &self.stopwords.as_ref().map(|s| s.len()))
            .field("stemmer", &self.stemmer.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl ResourceBundle {
    /// Load every resource available for `language`
    pub fn load(language: Language) -> Self {
        let stemmer: Option<Box<dyn WordStemmer>> = match language {
            Language::Indonesian => Some(Box::new(IndonesianStemmer::new())),
            Language::English | Language::Other => None,
        };

        let bundle = Self {
            language,
            segmenter: Some(Segmenter::UnicodeWords),
            stopwords: StopwordFilter::for_language(language),
            stemmer,
        };
        tracing::debug!(?bundle, "loaded linguistic resources");
        bundle
    }

    /// A bundle with no resources at all (every stage falls back)
    pub fn bare(language: Language) -> Self {
        Self {
            language,
            segmenter: None,
            stopwords: None,
            stemmer: None,
        }
    }

    /// Drop the word segmenter (tokenizer falls back to latin runs)
    pub fn without_segmenter(mut self) -> Self {
        self.segmenter = None;
        self
    }

    /// Drop the stopword list
    pub fn without_stopwords(mut self) -> Self {
        self.stopwords = None;
        self
    }

    /// Drop the stemmer
    pub fn without_stemmer(mut self) -> Self {
        self.stemmer = None;
        self
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Replace the stemmer
    pub fn with_stemmer(mut self, stemmer: Box<dyn WordStemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn segmenter(&self) -> Option<Segmenter> {
        self.segmenter
    }

    pub fn stopwords(&self) -> Option<&StopwordFilter> {
        self.stopwords.as_ref()
    }

    pub fn stemmer(&self) -> Option<&dyn WordStemmer> {
        self.stemmer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_indonesian() {
        let bundle = ResourceBundle::load(Language::Indonesian);
        assert_eq!(bundle.language(), Language::Indonesian);
        assert_eq!(bundle.segmenter(), Some(Segmenter::UnicodeWords));
        assert!(bundle.stopwords().is_some());
        assert!(bundle.stemmer().is_some());
    }

    #[test]
    fn test_load_english_has_no_stemmer() {
        let bundle = ResourceBundle::load(Language::English);
        assert!(bundle.stopwords().is_some());
        assert!(bundle.stemmer().is_none());
    }

    #[test]
    fn test_load_other_has_no_stopwords() {
        let bundle = ResourceBundle::load(Language::Other);
        assert!(bundle.stopwords().is_none());
        assert_eq!(bundle.segmenter(), Some(Segmenter::UnicodeWords));
    }

    #[test]
    fn test_bare_bundle() {
        let bundle = ResourceBundle::bare(Language::English);
        assert!(bundle.segmenter().is_none());
        assert!(bundle.stopwords().is_none());
        assert!(bundle.stemmer().is_none());
    }

    #[test]
    fn test_advisory_message() {
        let advisory = ResourceAdvisory::new(
            ResourceKind::Stopwords,
            Language::English,
            "no words removed",
        );
        assert_eq!(
            advisory.to_string(),
            "stopword list unavailable for 'en'; no words removed"
        );
    }
}
