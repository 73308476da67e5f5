//! Word tokenization
//!
//! Turns normalized text into the ordered token sequence the co-occurrence
//! graph is built from: lowercase, segment, keep ASCII letters only, drop
//! short words and stopwords, optionally stem.
//!
//! Segmentation uses UAX #29 word boundaries when the resource bundle has a
//! segmenter and falls back to maximal runs of latin letters otherwise. The
//! path taken is reported in [`TokenizeOutcome`] so callers (and tests) can
//! see which one ran.

use crate::nlp::resources::{ResourceAdvisory, ResourceBundle, ResourceKind, Segmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Language;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

fn latin_runs() -> &'static Regex {
    static LATIN: OnceLock<Regex> = OnceLock::new();
    LATIN.get_or_init(|| Regex::new("[a-z]+").expect("latin run pattern is a constant"))
}

/// Which segmentation path produced the candidate tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerPath {
    UnicodeWords,
    LatinFallback,
}

/// Where the language part of the stopword set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The bundle's stopword list was applied
    LanguageList,
    /// No list for this language; only custom stopwords applied
    Unavailable,
}

/// Tokens plus a record of which resources were used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizeOutcome {
    /// Cleaned tokens in document order
    pub tokens: Vec<String>,
    pub path: TokenizerPath,
    pub stopword_source: StopwordSource,
    /// Whether a stemmer was applied
    pub stemmed: bool,
    pub advisories: Vec<ResourceAdvisory>,
}

/// Configurable word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to keep, in letters
    min_token_length: usize,
    /// Extra stopwords merged into the language list
    custom_stopwords: StopwordFilter,
    /// Apply the bundle's stemmer
    stem: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 2,
            custom_stopwords: StopwordFilter::empty(),
            stem: false,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Add extra stopwords from a comma-separated string
    pub fn with_custom_stopwords(mut self, csv: &str) -> Self {
        self.custom_stopwords.extend_from_csv(csv);
        self
    }

    /// Request stemming
    pub fn with_stemming(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    /// Tokenize normalized text with the given resources
    pub fn tokenize(&self, text: &str, resources: &ResourceBundle) -> TokenizeOutcome {
        let language = resources.language();
        let mut advisories = Vec::new();

        let lower = text.to_lowercase();

        let (path, candidates): (TokenizerPath, Vec<&str>) = match resources.segmenter() {
            Some(Segmenter::UnicodeWords) => {
                (TokenizerPath::UnicodeWords, lower.unicode_words().collect())
            }
            Some(Segmenter::LatinRuns) => (TokenizerPath::LatinFallback, latin_words(&lower)),
            None => {
                advisories.push(advise(
                    ResourceKind::Segmenter,
                    language,
                    "falling back to latin-letter runs",
                ));
                (TokenizerPath::LatinFallback, latin_words(&lower))
            }
        };

        let (stopwords, stopword_source) = self.active_stopwords(resources, &mut advisories);

        let words = candidates
            .into_iter()
            .map(strip_non_letters)
            .filter(|w| w.len() >= self.min_token_length)
            .filter(|w| !stopwords.is_stopword(w));

        let stemmer = if self.stem {
            let stemmer = resources.stemmer();
            if stemmer.is_none() {
                advisories.push(advise(
                    ResourceKind::Stemmer,
                    language,
                    "tokens left unstemmed",
                ));
            }
            stemmer
        } else {
            None
        };

        let tokens: Vec<String> = match stemmer {
            Some(stemmer) => words.map(|w| stemmer.stem(&w)).collect(),
            None => words.collect(),
        };

        tracing::debug!(
            tokens = tokens.len(),
            ?path,
            ?stopword_source,
            stopwords = stopwords.len(),
            stemmed = stemmer.is_some(),
            "tokenized text"
        );

        TokenizeOutcome {
            tokens,
            path,
            stopword_source,
            stemmed: stemmer.is_some(),
            advisories,
        }
    }

    /// Language list ∪ custom terms
    fn active_stopwords(
        &self,
        resources: &ResourceBundle,
        advisories: &mut Vec<ResourceAdvisory>,
    ) -> (StopwordFilter, StopwordSource) {
        let (mut filter, source) = match resources.stopwords() {
            Some(list) => (list.clone(), StopwordSource::LanguageList),
            None => {
                if resources.language() != Language::Other {
                    advisories.push(advise(
                        ResourceKind::Stopwords,
                        resources.language(),
                        "only custom stopwords applied",
                    ));
                }
                (StopwordFilter::empty(), StopwordSource::Unavailable)
            }
        };
        filter.merge(&self.custom_stopwords);
        (filter, source)
    }
}

fn latin_words(text: &str) -> Vec<&str> {
    latin_runs().find_iter(text).map(|m| m.as_str()).collect()
}

/// Keep ASCII letters only (drops digits, punctuation and diacritics)
fn strip_non_letters(word: &str) -> String {
    word.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

fn advise(resource: ResourceKind, language: Language, fallback: &str) -> ResourceAdvisory {
    let advisory = ResourceAdvisory::new(resource, language, fallback);
    tracing::warn!(%advisory, "linguistic resource unavailable");
    advisory
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_without_stopwords() -> ResourceBundle {
        ResourceBundle::load(Language::Other)
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let outcome = tokenizer.tokenize("Word graphs rank Words.", &bundle_without_stopwords());

        assert_eq!(outcome.tokens, vec!["word", "graphs", "rank", "words"]);
        assert_eq!(outcome.path, TokenizerPath::UnicodeWords);
        assert!(outcome.advisories.is_empty());
    }

    #[test]
    fn test_strips_digits_and_diacritics() {
        let tokenizer = Tokenizer::new();
        let outcome = tokenizer.tokenize("café covid19 2024 a1 x", &bundle_without_stopwords());

        // "a1" -> "a" and "x" are below the minimum length, "2024" is empty
        assert_eq!(outcome.tokens, vec!["caf", "covid"]);
    }

    #[test]
    fn test_contractions_are_joined_letters() {
        let tokenizer = Tokenizer::new();
        let outcome = tokenizer.tokenize("don't stop", &bundle_without_stopwords());
        assert_eq!(outcome.tokens, vec!["dont", "stop"]);
    }

    #[test]
    fn test_english_stopwords_removed() {
        let tokenizer = Tokenizer::new();
        let bundle = ResourceBundle::load(Language::English);
        let outcome = tokenizer.tokenize("The graph of the network and the centrality", &bundle);

        assert_eq!(outcome.tokens, vec!["graph", "network", "centrality"]);
        assert_eq!(outcome.stopword_source, StopwordSource::LanguageList);
    }

    #[test]
    fn test_custom_stopwords() {
        let tokenizer = Tokenizer::new().with_custom_stopwords(" Graph ,RANKS");
        let outcome = tokenizer.tokenize("graph words ranks", &bundle_without_stopwords());
        assert_eq!(outcome.tokens, vec!["words"]);
    }

    #[test]
    fn test_custom_stopwords_accumulate() {
        let tokenizer = Tokenizer::new()
            .with_custom_stopwords("graph, ")
            .with_custom_stopwords(",WORDS");
        let outcome = tokenizer.tokenize("graph words ranks", &bundle_without_stopwords());
        assert_eq!(outcome.tokens, vec!["ranks"]);
    }

    #[test]
    fn test_custom_stopword_duplicate_of_language_list() {
        let bundle = ResourceBundle::load(Language::English);
        let text = "the graph and the words";
        let plain = Tokenizer::new().tokenize(text, &bundle);
        let duplicated = Tokenizer::new()
            .with_custom_stopwords("the,and")
            .tokenize(text, &bundle);
        assert_eq!(plain.tokens, duplicated.tokens);
    }

    #[test]
    fn test_latin_fallback_when_segmenter_missing() {
        let tokenizer = Tokenizer::new();
        let bundle = ResourceBundle::load(Language::Other).without_segmenter();
        let outcome = tokenizer.tokenize("graph-based ranking, v2 model", &bundle);

        assert_eq!(outcome.path, TokenizerPath::LatinFallback);
        assert_eq!(outcome.tokens, vec!["graph", "based", "ranking", "model"]);
        assert_eq!(outcome.advisories.len(), 1);
        assert_eq!(outcome.advisories[0].resource, ResourceKind::Segmenter);
    }

    #[test]
    fn test_missing_stopwords_advisory() {
        let tokenizer = Tokenizer::new();
        let bundle = ResourceBundle::load(Language::English).without_stopwords();
        let outcome = tokenizer.tokenize("the graph", &bundle);

        assert_eq!(outcome.tokens, vec!["the", "graph"]);
        assert_eq!(outcome.stopword_source, StopwordSource::Unavailable);
        assert!(outcome
            .advisories
            .iter()
            .any(|a| a.resource == ResourceKind::Stopwords));
    }

    #[test]
    fn test_indonesian_stemming() {
        let bundle = ResourceBundle::load(Language::Indonesian);
        let text = "membaca buku, dibaca lagi";

        let unstemmed = Tokenizer::new().tokenize(text, &bundle);
        assert!(unstemmed.tokens.contains(&"membaca".to_string()));
        assert!(!unstemmed.stemmed);

        let stemmed = Tokenizer::new().with_stemming(true).tokenize(text, &bundle);
        assert!(stemmed.stemmed);
        assert_eq!(stemmed.tokens.iter().filter(|t| *t == "baca").count(), 2);
    }

    #[test]
    fn test_stemming_unavailable_for_english() {
        let bundle = ResourceBundle::load(Language::English);
        let outcome = Tokenizer::new()
            .with_stemming(true)
            .tokenize("running graphs", &bundle);

        assert_eq!(outcome.tokens, vec!["running", "graphs"]);
        assert!(!outcome.stemmed);
        assert_eq!(outcome.advisories[0].resource, ResourceKind::Stemmer);
    }

    #[test]
    fn test_empty_input() {
        let outcome = Tokenizer::new().tokenize("", &bundle_without_stopwords());
        assert!(outcome.tokens.is_empty());
    }

    #[test]
    fn test_min_length() {
        let outcome = Tokenizer::new()
            .with_min_length(4)
            .tokenize("a ab abc abcd abcde", &bundle_without_stopwords());
        assert_eq!(outcome.tokens, vec!["abcd", "abcde"]);
    }
}
