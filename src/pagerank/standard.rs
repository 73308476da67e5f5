//! Weighted PageRank by power iteration
//!
//! A random surfer follows an incident edge with probability proportional
//! to its weight (probability `damping`) or jumps to a uniformly random node.
//! Mass sitting on isolated nodes is spread uniformly, so the score vector
//! always sums to one and isolated nodes end up with teleport mass only.

use crate::graph::csr::CsrGraph;
use crate::pagerank::PageRankResult;

/// Standard (uniform teleport) weighted PageRank
#[derive(Debug, Clone, Copy)]
pub struct StandardPageRank {
    damping: f64,
    max_iterations: usize,
    /// Per-node tolerance; the run stops when the L1 change < n * tolerance
    tolerance: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardPageRank {
    /// Damping 0.85, 100 iterations, tolerance 1e-6
    pub fn new() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run PageRank.
    ///
    /// Non-convergence is not an error: the last iterate is returned with
    /// `converged == false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::empty();
        }

        let uniform = 1.0 / n as f64;
        let teleport = (1.0 - self.damping) * uniform;
        let dangling: Vec<usize> = (0..n).filter(|&v| graph.strength(v) == 0.0).collect();

        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];
        let mut delta = f64::INFINITY;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&v| scores[v]).sum();
            let base = teleport + self.damping * dangling_mass * uniform;

            for (v, slot) in next.iter_mut().enumerate() {
                let inflow: f64 = graph
                    .neighbors(v)
                    .map(|(u, w)| scores[u] * w / graph.strength(u))
                    .sum();
                *slot = base + self.damping * inflow;
            }

            delta = next
                .iter()
                .zip(&scores)
                .map(|(a, b)| (a - b).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta < n as f64 * self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::warn!(
                iterations,
                delta,
                "PageRank did not converge; returning last iterate"
            );
        }

        // Remove floating-point drift so the scores sum to exactly one.
        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        tracing::debug!(nodes = n, iterations, delta, converged, "ranked graph");

        PageRankResult {
            scores,
            converged,
            iterations,
            delta,
        }
    }
}
