//! Community detection for node colouring
//!
//! Greedy agglomerative modularity maximization (Clauset, Newman and Moore).
//! Every node starts in its own community; the connected pair of communities
//! whose merge raises modularity the most is merged until no merge helps.
//!
//! With `m` the total edge weight, `e_ij` the fraction of edge weight running
//! between communities `i` and `j` (each direction counted) and `a_i` the
//! fraction of edge endpoints in `i`, merging `i` and `j` changes modularity by
//! `ΔQ = 2 (e_ij - a_i a_j)`.

use crate::graph::csr::CsrGraph;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

/// Assignment of every node to a community
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityPartition {
    /// Community ID per node, indexed by node ID
    pub assignments: Vec<usize>,
    /// Number of distinct communities
    pub community_count: usize,
    /// Modularity of the final partition
    pub modularity: f64,
    /// True when detection could not run and all nodes share community 0
    pub fallback: bool,
}

impl CommunityPartition {
    /// Every node in community 0
    pub fn single(num_nodes: usize) -> Self {
        Self {
            assignments: vec![0; num_nodes],
            community_count: usize::from(num_nodes > 0),
            modularity: 0.0,
            fallback: true,
        }
    }

    /// Community of a node
    pub fn community_of(&self, node: usize) -> Option<usize> {
        self.assignments.get(node).copied()
    }

    /// Node IDs grouped by community, indexed by community ID
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.community_count];
        for (node, &community) in self.assignments.iter().enumerate() {
            groups[community].push(node);
        }
        groups
    }

    /// Map node labels to community IDs
    pub fn by_label<'a, F>(&self, label: F) -> BTreeMap<String, usize>
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        self.assignments
            .iter()
            .enumerate()
            .filter_map(|(node, &community)| label(node).map(|w| (w.to_string(), community)))
            .collect()
    }
}

/// Greedy modularity community detector
#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityDetector;

impl CommunityDetector {
    pub fn new() -> Self {
        Self
    }

    /// Partition the graph.
    ///
    /// Never fails: a graph without edges (or with unusable weights) yields a
    /// single community flagged as a fallback.
    pub fn detect(&self, graph: &CsrGraph) -> CommunityPartition {
        let n = graph.num_nodes;
        let total = graph.total_weight();

        if graph.num_edges() == 0 || !total.is_finite() || total <= 0.0 {
            tracing::debug!(
                nodes = n,
                edges = graph.num_edges(),
                "community detection skipped; using a single community"
            );
            return CommunityPartition::single(n);
        }

        let two_m = 2.0 * total;

        // Community state, keyed by the node ID that absorbed the others.
        let mut a: Vec<f64> = (0..n).map(|v| graph.strength(v) / two_m).collect();
        let mut links: Vec<FxHashMap<usize, f64>> = (0..n)
            .map(|v| {
                graph
                    .neighbors(v)
                    .map(|(u, w)| (u, w / two_m))
                    .collect::<FxHashMap<_, _>>()
            })
            .collect();
        let mut alive = vec![true; n];
        let mut version = vec![0u32; n];
        let mut parent: Vec<usize> = (0..n).collect();

        let mut queue = BinaryHeap::with_capacity(graph.num_edges());
        for (i, row) in links.iter().enumerate() {
            for (&j, &e_ij) in row.iter().filter(|&(&j, _)| j > i) {
                queue.push(MergeCandidate::new(i, j, e_ij, &a, &version));
            }
        }

        let mut modularity: f64 = a.iter().map(|x| -x * x).sum();
        let mut merges = 0usize;

        while let Some(candidate) = queue.pop() {
            if !candidate.is_current(&alive, &version) {
                continue;
            }
            if candidate.gain <= 0.0 {
                break;
            }
            let (i, j) = (candidate.i, candidate.j);

            // Fold j into i.
            let absorbed = std::mem::take(&mut links[j]);
            for (k, e_jk) in absorbed {
                if k == i {
                    continue;
                }
                *links[i].entry(k).or_insert(0.0) += e_jk;
                let back = links[k].remove(&j).unwrap_or(0.0);
                *links[k].entry(i).or_insert(0.0) += back;
            }
            links[i].remove(&j);
            a[i] += a[j];
            a[j] = 0.0;
            alive[j] = false;
            parent[j] = i;
            version[i] += 1;

            // Only pairs touching i changed; everything queued for i or j is stale.
            for (&k, &e_ik) in &links[i] {
                let (lo, hi) = if i < k { (i, k) } else { (k, i) };
                queue.push(MergeCandidate::new(lo, hi, e_ik, &a, &version));
            }

            modularity += candidate.gain;
            merges += 1;
        }

        // Merges always fold the higher ID into the lower one, so a parent is
        // resolved before its children.
        let mut roots = parent;
        for v in 0..n {
            roots[v] = roots[roots[v]];
        }
        let (assignments, community_count) = relabel(&roots);

        tracing::debug!(
            nodes = n,
            merges,
            communities = community_count,
            modularity,
            "detected communities"
        );

        CommunityPartition {
            assignments,
            community_count,
            modularity,
            fallback: false,
        }
    }
}

/// A queued merge of communities `i < j`, valid while neither has changed
/// since it was queued.
#[derive(Debug, Clone, Copy)]
struct MergeCandidate {
    gain: f64,
    i: usize,
    j: usize,
    version_i: u32,
    version_j: u32,
}

impl MergeCandidate {
    fn new(i: usize, j: usize, e_ij: f64, a: &[f64], version: &[u32]) -> Self {
        Self {
            gain: 2.0 * (e_ij - a[i] * a[j]),
            i,
            j,
            version_i: version[i],
            version_j: version[j],
        }
    }

    fn is_current(&self, alive: &[bool], version: &[u32]) -> bool {
        alive[self.i]
            && alive[self.j]
            && version[self.i] == self.version_i
            && version[self.j] == self.version_j
    }
}

/// Largest gain first; equal gains pop the lowest `(i, j)` first.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .total_cmp(&other.gain)
            .then_with(|| other.i.cmp(&self.i))
            .then_with(|| other.j.cmp(&self.j))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MergeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MergeCandidate {}

/// Dense IDs: larger communities first, then by earliest member
fn relabel(roots: &[usize]) -> (Vec<usize>, usize) {
    let mut groups: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for (node, &root) in roots.iter().enumerate() {
        let entry = groups.entry(root).or_insert((0, node));
        entry.0 += 1;
        entry.1 = entry.1.min(node);
    }

    let mut order: Vec<(usize, usize, usize)> = groups
        .into_iter()
        .map(|(root, (size, first))| (root, size, first))
        .collect();
    order.sort_by(|x, y| y.1.cmp(&x.1).then(x.2.cmp(&y.2)));

    let ids: FxHashMap<usize, usize> = order
        .iter()
        .enumerate()
        .map(|(id, &(root, _, _))| (root, id))
        .collect();

    let assignments = roots.iter().map(|root| ids[root]).collect();
    (assignments, order.len())
}
