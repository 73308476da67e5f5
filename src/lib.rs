//! # wordgraph
//!
//! Word co-occurrence graphs for exploring a single document.
//!
//! Text is cleaned (the references section is cut off), tokenized with
//! language-aware stopword removal and optional Indonesian stemming, turned
//! into an undirected co-occurrence graph over a sliding window, and ranked
//! with weighted PageRank. The top words, an optional community partition and
//! a renderer-ready [`GraphView`] come back in one [`Analysis`].
//!
//! ```no_run
//! use wordgraph::{AnalysisOptions, Analyzer, Language};
//!
//! let analyzer = Analyzer::new(AnalysisOptions::new().with_language(Language::English))?;
//! if let Some(report) = analyzer.analyze("Graphs of words rank words in graphs ...")?.report() {
//!     for word in &report.ranked {
//!         println!("{}: {:.4}", word.word, word.score);
//!     }
//! }
//! # Ok::<(), wordgraph::WordGraphError>(())
//! ```

pub mod clustering;
pub mod errors;
pub mod extract;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod types;
pub mod visualization;

// Re-export commonly used types
pub use errors::{Result, WordGraphError};
pub use types::{AnalysisOptions, Language, RankedWord};

// Re-export main functionality
pub use clustering::{CommunityDetector, CommunityPartition};
#[cfg(feature = "pdf")]
pub use extract::PdfTextExtractor;
pub use extract::{DocumentInput, TextExtractor};
pub use graph::{builder::CooccurrenceGraph, csr::CsrGraph};
pub use nlp::{
    normalizer::TextNormalizer,
    resources::{ResourceAdvisory, ResourceBundle},
    stemmer::{IndonesianStemmer, WordStemmer},
    stopwords::StopwordFilter,
    tokenizer::{TokenizeOutcome, Tokenizer},
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{process, process_document, Analysis, AnalysisReport, Analyzer};
pub use visualization::{GraphView, ViewBuilder, VisualOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
