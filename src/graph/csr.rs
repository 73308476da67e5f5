//! Compressed sparse row view of the co-occurrence graph
//!
//! The hash-map adjacency of [`CooccurrenceGraph`] is convenient while
//! counting but has no stable iteration order. Ranking and clustering read
//! this immutable view instead: neighbours of every node are stored
//! contiguously and sorted by node ID, so floating-point sums are evaluated
//! in the same order on every run.

use crate::graph::builder::CooccurrenceGraph;

/// Immutable CSR adjacency with `f64` weights
#[derive(Debug, Clone, Default)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// `row_ptr[v]..row_ptr[v + 1]` indexes the neighbours of `v`
    row_ptr: Vec<usize>,
    /// Neighbour IDs, sorted within each row
    col_idx: Vec<u32>,
    /// Edge weights parallel to `col_idx`
    weights: Vec<f64>,
    /// Weighted degree of each node
    strength: Vec<f64>,
}

impl CsrGraph {
    /// Build from a co-occurrence graph
    pub fn from_graph(graph: &CooccurrenceGraph) -> Self {
        let num_nodes = graph.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(graph.edge_count() * 2);
        let mut weights = Vec::with_capacity(graph.edge_count() * 2);
        let mut strength = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for (_, node) in graph.nodes() {
            let mut row: Vec<(u32, u32)> = node.edges.iter().map(|(&n, &w)| (n, w)).collect();
            row.sort_unstable_by_key(|&(n, _)| n);

            let mut total = 0.0;
            for (neighbour, weight) in row {
                col_idx.push(neighbour);
                weights.push(f64::from(weight));
                total += f64::from(weight);
            }
            strength.push(total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            strength,
        }
    }

    /// Neighbours of `node` with their edge weights, in ID order
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_ptr[node]..self.row_ptr[node + 1];
        self.col_idx[range.clone()]
            .iter()
            .zip(&self.weights[range])
            .map(|(&n, &w)| (n as usize, w))
    }

    /// Weighted degree of `node`
    pub fn strength(&self, node: usize) -> f64 {
        self.strength[node]
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Sum of all edge weights, each undirected edge counted once
    pub fn total_weight(&self) -> f64 {
        self.strength.iter().sum::<f64>() / 2.0
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_graph() {
        let tokens = ["cat", "dog", "cat", "bird", "dog", "cat"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);
        let csr = CsrGraph::from_graph(&graph);

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 3);
        assert_eq!(csr.neighbors(0).collect::<Vec<_>>(), vec![(1, 4.0), (2, 2.0)]);
        assert_eq!(csr.neighbors(1).collect::<Vec<_>>(), vec![(0, 4.0), (2, 2.0)]);
        assert_eq!(csr.strength(2), 4.0);
        assert_eq!(csr.total_weight(), 8.0);
    }

    #[test]
    fn test_isolated_node_has_empty_row() {
        let tokens = ["solo"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);
        let csr = CsrGraph::from_graph(&graph);

        assert_eq!(csr.num_nodes, 1);
        assert_eq!(csr.neighbors(0).count(), 0);
        assert_eq!(csr.strength(0), 0.0);
    }

    #[test]
    fn test_empty() {
        let csr = CsrGraph::from_graph(&CooccurrenceGraph::new());
        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
    }
}
