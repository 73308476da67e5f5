//! Pipeline outputs.
//!
//! [`Analysis`] is what one run hands back to the UI layer: either a full
//! [`AnalysisReport`] or an [`InsufficientInput`] notice when the text was too
//! short to build a meaningful graph. Everything here is plain data and
//! serializes with serde.

use crate::graph::builder::GraphSummary;
use crate::nlp::resources::ResourceAdvisory;
use crate::nlp::tokenizer::TokenizerPath;
use crate::pagerank::RankingDiagnostics;
use crate::types::RankedWord;
use crate::visualization::GraphView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Not enough tokens survived filtering to build a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientInput {
    pub token_count: usize,
    /// Tokens required
    pub minimum: usize,
    pub cleaned_text: String,
    pub advisories: Vec<ResourceAdvisory>,
}

/// Everything produced by a complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub cleaned_text: String,
    /// Leading slice of `cleaned_text` for display
    pub preview: String,
    pub token_count: usize,
    pub tokenizer_path: TokenizerPath,
    pub stemmed: bool,
    pub graph_summary: GraphSummary,
    /// Top words, best first
    pub ranked: Vec<RankedWord>,
    /// Word -> community ID, when detection was requested
    pub communities: Option<BTreeMap<String, usize>>,
    pub community_count: Option<usize>,
    pub ranking: RankingDiagnostics,
    pub advisories: Vec<ResourceAdvisory>,
    pub view: GraphView,
}

impl AnalysisReport {
    /// Score of a ranked word
    pub fn score_of(&self, word: &str) -> Option<f64> {
        self.ranked.iter().find(|r| r.word == word).map(|r| r.score)
    }

    /// Highest-ranked word
    pub fn top_word(&self) -> Option<&str> {
        self.ranked.first().map(|r| r.word.as_str())
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    Insufficient(InsufficientInput),
    Complete(AnalysisReport),
}

impl Analysis {
    pub fn is_complete(&self) -> bool {
        matches!(self, Analysis::Complete(_))
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Analysis::Complete(report) => Some(report),
            Analysis::Insufficient(_) => None,
        }
    }

    pub fn into_report(self) -> Option<AnalysisReport> {
        match self {
            Analysis::Complete(report) => Some(report),
            Analysis::Insufficient(_) => None,
        }
    }

    /// Number of tokens after filtering
    pub fn token_count(&self) -> usize {
        match self {
            Analysis::Complete(report) => report.token_count,
            Analysis::Insufficient(notice) => notice.token_count,
        }
    }

    pub fn advisories(&self) -> &[ResourceAdvisory] {
        match self {
            Analysis::Complete(report) => &report.advisories,
            Analysis::Insufficient(notice) => &notice.advisories,
        }
    }

    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
