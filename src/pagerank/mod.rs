//! PageRank centrality
//!
//! [`standard::StandardPageRank`] computes weighted PageRank over a
//! [`CsrGraph`](crate::graph::csr::CsrGraph); [`top_k`] turns the score
//! vector into the ranked word list.

pub mod standard;

use crate::graph::builder::CooccurrenceGraph;
use crate::types::RankedWord;
use serde::{Deserialize, Serialize};

/// Scores plus convergence information
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per node, indexed by node ID
    pub scores: Vec<f64>,
    /// Whether the iteration met the tolerance
    pub converged: bool,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 change of the last iteration
    pub delta: f64,
}

impl PageRankResult {
    /// Result for a graph without nodes
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            converged: true,
            iterations: 0,
            delta: 0.0,
        }
    }

    /// Convergence information without the scores
    pub fn diagnostics(&self) -> RankingDiagnostics {
        RankingDiagnostics {
            converged: self.converged,
            iterations: self.iterations,
            delta: self.delta,
        }
    }
}

/// Convergence information reported with an analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingDiagnostics {
    pub converged: bool,
    pub iterations: usize,
    pub delta: f64,
}

/// The `k` highest-scoring nodes, best first.
///
/// Equal scores keep first-appearance order (lower node ID first).
pub fn top_k(graph: &CooccurrenceGraph, scores: &[f64], k: usize) -> Vec<RankedWord> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    order
        .into_iter()
        .take(k)
        .filter_map(|id| {
            graph
                .get_word(id as u32)
                .map(|word| RankedWord::new(word, scores[id]))
        })
        .collect()
}
