//! Walks over a graph as ordered node sequences
//!
//! A [`Path`] does not borrow a graph; costs and validity are evaluated
//! against whichever graph (or shortest-path table) is passed in.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::all_pairs::AllPairsShortestPaths;
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::Graph;

/// Ordered sequence of nodes; a cycle repeats its first node at the end
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Non-empty and ending where it starts
    pub fn is_cycle(&self) -> bool {
        !self.nodes.is_empty() && self.first() == self.last()
    }

    /// Sum of the weights of consecutive edges
    ///
    /// Returns `None` if some consecutive pair is not an edge of `graph`.
    /// Paths with fewer than two nodes cost zero.
    pub fn cost(&self, graph: &Graph) -> Option<f64> {
        self.nodes
            .windows(2)
            .try_fold(0.0, |total, hop| Some(total + graph.length(hop[0], hop[1])?))
    }

    pub fn is_valid(&self, graph: &Graph) -> bool {
        self.cost(graph).is_some()
    }

    /// Cost when every hop is travelled along its shortest path
    pub fn cost_expanding_shortest_paths(&self, apsp: &AllPairsShortestPaths) -> Option<f64> {
        self.nodes
            .windows(2)
            .try_fold(0.0, |total, hop| Some(total + apsp.distance(hop[0], hop[1])?))
    }

    /// Replaces every hop by the shortest path between its endpoints
    pub fn expand_shortest_paths(&self, apsp: &AllPairsShortestPaths) -> Option<Path> {
        let mut expanded = Path::new();
        if let Some(start) = self.first() {
            expanded.push(start);
        }

        for hop in self.nodes.windows(2) {
            let segment = apsp.path(hop[0], hop[1])?;
            expanded.nodes.extend(segment.iter().skip(1));
        }
        Some(expanded)
    }

    /// Rotates a cycle so that it starts and ends at `start`
    pub fn rotate_to(&self, start: NodeId) -> Option<Path> {
        if !self.is_cycle() {
            return None;
        }

        let body = &self.nodes[..self.nodes.len() - 1];
        let offset = body.iter().position(|&node| node == start)?;

        let mut nodes = Vec::with_capacity(self.nodes.len());
        nodes.extend_from_slice(&body[offset..]);
        nodes.extend_from_slice(&body[..offset]);
        nodes.push(start);
        Some(Path { nodes })
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<NodeId> for Path {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<String> = self.nodes.iter().map(|node| format!("n{}", node)).collect();
        write!(f, "[{}]", nodes.join(" -> "))
    }
}
