//! Core types for wordgraph
//!
//! This module defines the language selector, the ranked-word record and the
//! analysis options shared by every pipeline stage.

use crate::errors::{Result, WordGraphError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Language
// ============================================================================

/// Languages with linguistic resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English: stopword list, no stemmer
    #[serde(alias = "en", alias = "inggris")]
    English,
    /// Bahasa Indonesia: stopword list and affix stemmer
    #[default]
    #[serde(alias = "indonesia", alias = "id", alias = "bahasa")]
    Indonesian,
    /// Any other language: no stopword list, no stemmer
    #[serde(alias = "none")]
    Other,
}

impl Language {
    /// Short code used in logs and advisories
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
            Language::Other => "other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = WordGraphError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" | "inggris" => Ok(Language::English),
            "indonesia" | "indonesian" | "id" | "bahasa" => Ok(Language::Indonesian),
            "other" | "none" => Ok(Language::Other),
            other => Err(WordGraphError::invalid_config(format!(
                "unsupported language '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Ranked word
// ============================================================================

/// A word together with its centrality score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The (possibly stemmed) word, i.e. the graph node key
    pub word: String,
    /// PageRank score
    pub score: f64,
}

impl RankedWord {
    /// Create a new ranked word
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Smallest accepted co-occurrence window
pub const MIN_WINDOW_SIZE: usize = 1;
/// Largest accepted co-occurrence window
pub const MAX_WINDOW_SIZE: usize = 5;
/// Smallest accepted `top_n`
pub const MIN_TOP_N: usize = 5;
/// Largest accepted `top_n`
pub const MAX_TOP_N: usize = 100;

/// Options for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Language used for stopwords and stemming
    pub language: Language,
    /// Co-occurrence window (number of following tokens linked to each token)
    pub window_size: usize,
    /// Number of top-ranked words to return
    pub top_n: usize,
    /// Apply affix stemming (only effective when the language has a stemmer)
    pub do_stem: bool,
    /// Extra comma-separated stopwords
    pub custom_stopwords: String,
    /// Minimum token length in letters
    pub min_token_length: usize,
    /// Minimum number of tokens needed to build a graph
    pub min_tokens: usize,
    /// Damping factor for PageRank
    pub damping: f64,
    /// Maximum PageRank iterations
    pub max_iterations: usize,
    /// Per-node convergence tolerance
    pub tolerance: f64,
    /// Run community detection for node colouring
    pub detect_communities: bool,
    /// Multiplicative scale for node sizes, edge widths and fonts
    pub scale: f64,
    /// Base label font size
    pub base_font_size: f64,
    /// Characters of cleaned text kept in the preview
    pub preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            window_size: 2,
            top_n: 20,
            do_stem: false,
            custom_stopwords: String::new(),
            min_token_length: 2,
            min_tokens: 5,
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            detect_communities: true,
            scale: 1.0,
            base_font_size: 14.0,
            preview_chars: 5000,
        }
    }
}

impl AnalysisOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(WordGraphError::invalid_config(format!(
                "window_size must be between {} and {}, got {}",
                MIN_WINDOW_SIZE, MAX_WINDOW_SIZE, self.window_size
            )));
        }

        if !(MIN_TOP_N..=MAX_TOP_N).contains(&self.top_n) {
            return Err(WordGraphError::invalid_config(format!(
                "top_n must be between {} and {}, got {}",
                MIN_TOP_N, MAX_TOP_N, self.top_n
            )));
        }

        if self.min_token_length == 0 {
            return Err(WordGraphError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        // Empty text must never reach graph construction.
        if self.min_tokens == 0 {
            return Err(WordGraphError::invalid_config("min_tokens must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WordGraphError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(WordGraphError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.tolerance > 0.0) {
            return Err(WordGraphError::invalid_config("tolerance must be > 0"));
        }

        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(WordGraphError::invalid_config(
                "scale must be a positive finite number",
            ));
        }

        if !(self.base_font_size > 0.0 && self.base_font_size.is_finite()) {
            return Err(WordGraphError::invalid_config(
                "base_font_size must be a positive finite number",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set top N words to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: enable or disable stemming
    pub fn with_stemming(mut self, do_stem: bool) -> Self {
        self.do_stem = do_stem;
        self
    }

    /// Builder method: set extra comma-separated stopwords
    pub fn with_custom_stopwords(mut self, stopwords: impl Into<String>) -> Self {
        self.custom_stopwords = stopwords.into();
        self
    }

    /// Builder method: set the minimum token count for graph construction
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: enable or disable community detection
    pub fn with_communities(mut self, detect: bool) -> Self {
        self.detect_communities = detect;
        self
    }

    /// Builder method: set display scale and base font size
    pub fn with_display(mut self, scale: f64, base_font_size: f64) -> Self {
        self.scale = scale;
        self.base_font_size = base_font_size;
        self
    }
}
