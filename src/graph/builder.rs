//! Co-occurrence graph construction
//!
//! This module provides a mutable word graph that uses FxHashMap for O(1)
//! node and edge lookups while the sliding window walks the token sequence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A node in the co-occurrence graph
#[derive(Debug, Clone)]
pub struct WordNode {
    /// The word for this node
    pub word: String,
    /// Adjacency list: neighbour node ID -> co-occurrence count
    pub edges: FxHashMap<u32, u32>,
}

impl WordNode {
    /// Create a new isolated node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }

    /// Sum of incident edge weights
    pub fn strength(&self) -> u64 {
        self.edges.values().map(|&w| u64::from(w)).sum()
    }

    /// Number of distinct neighbours
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// One undirected edge, reported once with `source < target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: u32,
    pub target: u32,
    pub weight: u32,
}

/// Node and edge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Undirected, simple, weighted word graph.
///
/// Node IDs are dense and assigned in first-appearance order, so ID order is
/// document order.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<WordNode>,
}

impl CooccurrenceGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Build a graph from tokens using a forward sliding window.
    ///
    /// Every token becomes a node. For each position `i`, the tokens at
    /// positions `i+1 ..= i+window` are linked to it when the words differ,
    /// so an edge's weight is the number of such index pairs.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], window: usize) -> Self {
        let mut graph = Self::with_capacity(tokens.len() / 2);
        let ids: Vec<u32> = tokens
            .iter()
            .map(|t| graph.get_or_create_node(t.as_ref()))
            .collect();

        for i in 0..ids.len() {
            let end = std::cmp::min(i + 1 + window, ids.len());
            for j in (i + 1)..end {
                graph.increment_edge(ids[i], ids[j], 1);
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            window,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );
        graph
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(WordNode::new(word));
        id
    }

    /// Increment the edge weight between two nodes
    ///
    /// If the edge doesn't exist, it's created with the given weight.
    /// If it exists, the weight is added to the existing weight.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: u32) {
        if from == to {
            return; // No self-loops
        }

        // Add edge in both directions (undirected graph)
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0) += weight;
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Node and edge counts
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }

    /// Sum of all edge weights (each undirected edge once)
    pub fn total_weight(&self) -> u64 {
        self.nodes.iter().map(|n| n.strength()).sum::<u64>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&WordNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word for a node ID
    pub fn get_word(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }

    /// Weight of the edge between two words, if any
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.get_node_id(a)?;
        let b = self.get_node_id(b)?;
        self.nodes[a as usize].edges.get(&b).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &WordNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// All undirected edges once each, sorted by `(source, target)`
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .nodes()
            .flat_map(|(id, node)| {
                node.edges
                    .iter()
                    .filter(move |&(&other, _)| other > id)
                    .map(move |(&other, &weight)| Edge {
                        source: id,
                        target: other,
                        weight,
                    })
            })
            .collect();
        edges.sort_unstable_by_key(|e| (e.source, e.target));
        edges
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph = CooccurrenceGraph::new();

        let id_a = graph.get_or_create_node("machine");
        let id_b = graph.get_or_create_node("learning");
        let id_c = graph.get_or_create_node("machine"); // duplicate

        assert_eq!(id_a, id_c); // Same word should get same ID
        assert_ne!(id_a, id_b);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_edge_incrementing() {
        let mut graph = CooccurrenceGraph::new();

        let id_a = graph.get_or_create_node("machine");
        let id_b = graph.get_or_create_node("learning");

        graph.increment_edge(id_a, id_b, 1);
        graph.increment_edge(id_a, id_b, 1);

        // Should have weight 2 in both directions
        assert_eq!(graph.get_node(id_a).unwrap().edges.get(&id_b), Some(&2));
        assert_eq!(graph.get_node(id_b).unwrap().edges.get(&id_a), Some(&2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_prevented() {
        let mut graph = CooccurrenceGraph::new();
        let id_a = graph.get_or_create_node("test");

        graph.increment_edge(id_a, id_a, 1);

        let node = graph.get_node(id_a).unwrap();
        assert!(node.edges.is_empty());
    }

    #[test]
    fn test_cat_dog_bird_window_two() {
        let tokens = ["cat", "dog", "cat", "bird", "dog", "cat"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight("cat", "dog"), Some(4));
        assert_eq!(graph.edge_weight("dog", "bird"), Some(2));
        assert_eq!(graph.edge_weight("cat", "bird"), Some(2));
        assert_eq!(graph.edge_weight("dog", "cat"), Some(4));
    }

    #[test]
    fn test_window_one_links_neighbours_only() {
        let tokens = ["alpha", "beta", "gamma"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 1);

        assert_eq!(graph.edge_weight("alpha", "beta"), Some(1));
        assert_eq!(graph.edge_weight("beta", "gamma"), Some(1));
        assert_eq!(graph.edge_weight("alpha", "gamma"), None);
    }

    #[test]
    fn test_repeated_word_is_isolated_node() {
        let tokens = ["echo", "echo", "echo"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 3);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.get_node(0).unwrap().degree(), 0);
    }

    #[test]
    fn test_node_ids_follow_first_appearance() {
        let tokens = ["zeta", "alpha", "zeta", "mu"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);

        assert_eq!(graph.get_node_id("zeta"), Some(0));
        assert_eq!(graph.get_node_id("alpha"), Some(1));
        assert_eq!(graph.get_node_id("mu"), Some(2));
    }

    #[test]
    fn test_edges_sorted_once_each() {
        let tokens = ["cat", "dog", "cat", "bird", "dog", "cat"];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);
        let edges = graph.edges();

        assert_eq!(
            edges,
            vec![
                Edge { source: 0, target: 1, weight: 4 },
                Edge { source: 0, target: 2, weight: 2 },
                Edge { source: 1, target: 2, weight: 2 },
            ]
        );
        assert_eq!(graph.total_weight(), 8);
    }

    #[test]
    fn test_empty_tokens() {
        let tokens: [&str; 0] = [];
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);
        assert!(graph.is_empty());
        assert_eq!(graph.summary(), GraphSummary::default());
    }
}
