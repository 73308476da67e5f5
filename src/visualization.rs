//! Renderer-agnostic graph view
//!
//! Maps the ranked subgraph to the attributes an interactive network renderer
//! needs (node size, colour, font size, tooltip, edge width). The result is a
//! plain serializable [`GraphView`]; layout and drawing are left to the
//! consumer.

use crate::clustering::CommunityPartition;
use crate::errors::Result;
use crate::graph::builder::CooccurrenceGraph;
use crate::types::RankedWord;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Node colour used when no community partition is available
pub const DEFAULT_NODE_COLOR: &str = "#97c2fc";

const MIN_NODE_SIZE: f64 = 10.0;
const NODE_SIZE_RANGE: f64 = 40.0;

/// Display scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualOptions {
    /// Multiplier applied to node sizes, fonts and edge widths
    pub scale: f64,
    /// Label font size at scale 1.0
    pub base_font_size: f64,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            base_font_size: 14.0,
        }
    }
}

/// One node as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub id: String,
    pub label: String,
    pub title: String,
    pub score: f64,
    pub size: f64,
    pub font_size: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<usize>,
}

/// One edge as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
    pub width: f64,
    pub title: String,
}

/// Nodes and edges ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

impl GraphView {
    /// Serialize for the renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// `count` evenly spaced hues as `#rrggbb`
pub fn palette(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let hue = 360.0 * i as f64 / count as f64;
            hsl_to_hex(hue, 0.65, 0.6)
        })
        .collect()
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let offset = lightness - chroma / 2.0;
    let channel = |c: f64| ((c + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Builds a [`GraphView`] from ranking results
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewBuilder {
    options: VisualOptions,
}

impl ViewBuilder {
    pub fn new(options: VisualOptions) -> Self {
        Self { options }
    }

    /// Lay out the top-ranked words and the edges among them.
    ///
    /// Edges with an endpoint outside `ranked` are dropped.
    pub fn build(
        &self,
        graph: &CooccurrenceGraph,
        ranked: &[RankedWord],
        partition: Option<&CommunityPartition>,
    ) -> GraphView {
        let scale = self.options.scale;
        let max_score = ranked.iter().map(|r| r.score).fold(0.0_f64, f64::max);
        let colors = partition.map(|p| palette(p.community_count)).unwrap_or_default();

        let mut selected: FxHashMap<u32, &str> = FxHashMap::default();
        let mut nodes = Vec::with_capacity(ranked.len());

        for entry in ranked {
            let Some(id) = graph.get_node_id(&entry.word) else { continue };
            selected.insert(id, entry.word.as_str());

            let normalized = if max_score > 0.0 { entry.score / max_score } else { 0.0 };
            let community = partition.and_then(|p| p.community_of(id as usize));
            let color = community
                .and_then(|c| colors.get(c).cloned())
                .unwrap_or_else(|| DEFAULT_NODE_COLOR.to_string());

            nodes.push(ViewNode {
                id: entry.word.clone(),
                label: entry.word.clone(),
                title: format!("{}: {:.6}", entry.word, entry.score),
                score: entry.score,
                size: scale * (MIN_NODE_SIZE + normalized * NODE_SIZE_RANGE),
                font_size: self.options.base_font_size * scale,
                color,
                community,
            });
        }

        let edges: Vec<ViewEdge> = graph
            .edges()
            .into_iter()
            .filter_map(|edge| {
                let from = selected.get(&edge.source)?;
                let to = selected.get(&edge.target)?;
                Some(ViewEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: edge.weight,
                    width: scale * (1.0 + f64::from(edge.weight).ln()),
                    title: format!("{} - {}: {}", from, to, edge.weight),
                })
            })
            .collect();

        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "built graph view");
        GraphView { nodes, edges }
    }
}
