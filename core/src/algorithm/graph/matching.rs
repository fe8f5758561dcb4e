//! Maximum cardinality matching on bipartite graphs
//!
//! The two sides of the graph are found with a breadth-first 2-coloring;
//! a graph needing more colors is rejected. The default method reduces the
//! problem to a unit-capacity maximum flow from a super-source attached to
//! side A to a super-sink attached to side B. Kuhn's augmenting-path search
//! is available as an alternative and always finds a matching of the same
//! size.
//!
//! The graph is expected to be symmetrical, as for any undirected graph.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::coloring::{ColoringStrategy, HeuristicColoring};
use super::max_flow::MaximumFlow;
use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::{Edge, Graph};

const SIDE_A: usize = 1;
const SIDE_B: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchingMethod {
    /// Edmonds-Karp on the source/sink network
    #[default]
    MaximumFlow,
    /// Kuhn's augmenting paths on the partition itself
    AugmentingPaths,
}

impl fmt::Display for MatchingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingMethod::MaximumFlow => f.write_str("max_flow"),
            MatchingMethod::AugmentingPaths => f.write_str("augmenting_paths"),
        }
    }
}

impl FromStr for MatchingMethod {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max_flow" | "flow" => Ok(MatchingMethod::MaximumFlow),
            "augmenting_paths" | "kuhn" => Ok(MatchingMethod::AugmentingPaths),
            _ => Err(GraphError::invalid_parameter(
                "method",
                "Must be 'max_flow' or 'augmenting_paths'",
            )),
        }
    }
}

#[derive(Debug)]
pub struct MaximumBipartiteMatching<'a> {
    graph: &'a Graph,
    method: MatchingMethod,
    side_a: Vec<NodeId>,
    side_b: Vec<NodeId>,
    matching: Vec<Edge>,
}

impl<'a> MaximumBipartiteMatching<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            method: MatchingMethod::default(),
            side_a: Vec::new(),
            side_b: Vec::new(),
            matching: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MatchingMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> MatchingMethod {
        self.method
    }

    /// Computes a maximum matching and returns its size
    ///
    /// Fails with [`GraphError::NotBipartite`] if the breadth-first coloring
    /// needs more than two colors.
    pub fn compute(&mut self) -> Result<usize, GraphError> {
        self.side_a.clear();
        self.side_b.clear();
        self.matching.clear();

        let mut coloring = HeuristicColoring::new(self.graph).with_strategy(ColoringStrategy::Bfs);
        let num_colors = coloring.compute()?;
        if num_colors > 2 {
            warn!("matching requested on a graph needing {} colors", num_colors);
            return Err(GraphError::NotBipartite(num_colors));
        }
        let colors = coloring.colors();

        for node in self.graph.nodes() {
            match colors[node] {
                SIDE_A => self.side_a.push(node),
                _ => self.side_b.push(node),
            }
        }

        self.matching = match self.method {
            MatchingMethod::MaximumFlow => self.match_by_max_flow(colors)?,
            MatchingMethod::AugmentingPaths => self.match_by_augmenting_paths(colors),
        };

        debug!(
            "{} matching between {} and {} nodes has size {}",
            self.method,
            self.side_a.len(),
            self.side_b.len(),
            self.matching.len()
        );
        Ok(self.matching.len())
    }

    fn cross_edges<'g>(graph: &'g Graph, colors: &'g [usize], a: NodeId) -> impl Iterator<Item = &'g Edge> + 'g {
        graph.out_edges(a).filter(move |edge| colors[edge.target()] == SIDE_B)
    }

    fn match_by_max_flow(&self, colors: &[usize]) -> Result<Vec<Edge>, GraphError> {
        let n = self.graph.num_nodes();
        let (source, sink) = (n, n + 1);

        let mut network = Graph::with_representation(n + 2, self.graph.representation());
        for &a in &self.side_a {
            network.add_edge(source, a, 1.0)?;
            for edge in Self::cross_edges(self.graph, colors, a) {
                network.add_edge(a, edge.target(), 1.0)?;
            }
        }
        for &b in &self.side_b {
            network.add_edge(b, sink, 1.0)?;
        }

        let mut max_flow = MaximumFlow::new(&network);
        max_flow.compute(source, sink)?;

        Ok(self
            .side_a
            .iter()
            .flat_map(|&a| Self::cross_edges(self.graph, colors, a))
            .filter(|edge| max_flow.flow(edge.source(), edge.target()) > 0)
            .copied()
            .collect())
    }

    fn match_by_augmenting_paths(&self, colors: &[usize]) -> Vec<Edge> {
        let n = self.graph.num_nodes();
        let mut neighbors: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for &a in &self.side_a {
            neighbors[a] = Self::cross_edges(self.graph, colors, a)
                .map(|edge| edge.target())
                .collect();
        }

        let mut partner_of_b: Vec<Option<NodeId>> = vec![None; n];
        // `visited[b] == a` marks side B nodes already tried from root `a`
        let mut visited: Vec<Option<NodeId>> = vec![None; n];
        for &a in &self.side_a {
            Self::try_kuhn(&neighbors, a, &mut visited, &mut partner_of_b);
        }

        let mut partner_of_a: Vec<Option<NodeId>> = vec![None; n];
        for (b, partner) in partner_of_b.iter().enumerate() {
            if let Some(a) = *partner {
                partner_of_a[a] = Some(b);
            }
        }

        self.side_a
            .iter()
            .filter_map(|&a| partner_of_a[a].and_then(|b| self.graph.edge(a, b)).copied())
            .collect()
    }

    /// Depth-first search for an augmenting path starting at the free node
    /// `root`, flipping the matching along it when found
    ///
    /// `stack[i]` holds a node of side A with the index of its next neighbor
    /// to try, and `via[i]` the side B node through which `stack[i + 1]` was
    /// reached.
    fn try_kuhn(
        neighbors: &[Vec<NodeId>],
        root: NodeId,
        visited: &mut [Option<NodeId>],
        partner_of_b: &mut [Option<NodeId>],
    ) -> bool {
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        let mut via: Vec<NodeId> = Vec::new();

        while let Some(frame) = stack.last_mut() {
            let a = frame.0;
            let Some(&b) = neighbors[a].get(frame.1) else {
                stack.pop();
                via.pop();
                continue;
            };
            frame.1 += 1;
            if visited[b] == Some(root) {
                continue;
            }
            visited[b] = Some(root);
            via.push(b);

            match partner_of_b[b] {
                Some(other) => stack.push((other, 0)),
                None => {
                    for (&(a, _), &b) in stack.iter().zip(&via) {
                        partner_of_b[b] = Some(a);
                    }
                    return true;
                }
            }
        }
        false
    }

    /// Number of matched pairs
    pub fn size(&self) -> usize {
        self.matching.len()
    }

    /// Matched edges of the input graph, oriented from side A to side B
    pub fn matching(&self) -> &[Edge] {
        &self.matching
    }

    /// Nodes colored 1 and nodes colored 2 by the last computation
    pub fn partitions(&self) -> (&[NodeId], &[NodeId]) {
        (&self.side_a, &self.side_b)
    }
}

impl Algorithm for MaximumBipartiteMatching<'_> {
    fn name(&self) -> &'static str {
        "Maximum Bipartite Matching"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["method"]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        match name {
            "method" => {
                self.method = value.parse()?;
                Ok(())
            }
            _ => Err(GraphError::invalid_parameter(name, "Unknown parameter")),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "method" => Some(self.method.to_string()),
            _ => None,
        }
    }
}
