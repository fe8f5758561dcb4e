//! Floyd-Warshall all-pairs shortest paths
//!
//! Distances are computed eagerly in O(n^3) time and O(n^2) memory.
//! Predecessor and successor matrices allow reconstructing any shortest path
//! from either end. Unreachable pairs report `None`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::{Graph, Representation};
use crate::data_structures::path::Path;

/// Shortest distances between every ordered pair of nodes
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    num_nodes: usize,
    /// `f64::INFINITY` marks unreachable pairs
    distance: Vec<Vec<f64>>,
    /// `predecessor[s][d]` is the node before `d` on a shortest `s -> d` path
    predecessor: Vec<Vec<Option<NodeId>>>,
    /// `successor[s][d]` is the node after `s` on a shortest `s -> d` path
    successor: Vec<Vec<Option<NodeId>>>,
}

impl AllPairsShortestPaths {
    pub fn new(graph: &Graph) -> Self {
        let n = graph.num_nodes();
        let mut distance = vec![vec![f64::INFINITY; n]; n];
        let mut predecessor = vec![vec![None; n]; n];
        let mut successor = vec![vec![None; n]; n];

        for edge in graph.edges() {
            let (v, u) = (edge.source(), edge.target());
            if edge.weight() < distance[v][u] {
                distance[v][u] = edge.weight();
                predecessor[v][u] = Some(v);
                successor[v][u] = Some(u);
            }
        }
        // self-pairs have no predecessor or successor, self-loops included
        for v in 0..n {
            distance[v][v] = 0.0;
            predecessor[v][v] = None;
            successor[v][v] = None;
        }

        let mut relaxations = 0usize;
        for k in 0..n {
            for i in 0..n {
                let through_k = distance[i][k];
                if through_k == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distance[k][j];
                    if candidate < distance[i][j] {
                        distance[i][j] = candidate;
                        predecessor[i][j] = predecessor[k][j];
                        successor[i][j] = successor[i][k];
                        relaxations += 1;
                    }
                }
            }
        }

        debug!(
            "Floyd-Warshall finished on {} nodes with {} relaxations",
            n, relaxations
        );

        Self {
            num_nodes: n,
            distance,
            predecessor,
            successor,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn in_range(&self, s: NodeId, d: NodeId) -> bool {
        s < self.num_nodes && d < self.num_nodes
    }

    /// Length of a shortest `s -> d` path, `None` if `d` is unreachable
    pub fn distance(&self, s: NodeId, d: NodeId) -> Option<f64> {
        if !self.in_range(s, d) {
            return None;
        }
        let distance = self.distance[s][d];
        (distance != f64::INFINITY).then_some(distance)
    }

    pub fn exists_path(&self, s: NodeId, d: NodeId) -> bool {
        self.distance(s, d).is_some()
    }

    /// Second node of a shortest `s -> d` path, `None` when `s == d`
    pub fn source_successor(&self, s: NodeId, d: NodeId) -> Option<NodeId> {
        if !self.in_range(s, d) {
            return None;
        }
        self.successor[s][d]
    }

    /// Node preceding `d` on a shortest `s -> d` path, `None` when `s == d`
    pub fn destination_predecessor(&self, s: NodeId, d: NodeId) -> Option<NodeId> {
        if !self.in_range(s, d) {
            return None;
        }
        self.predecessor[s][d]
    }

    /// Reconstructs a shortest `s -> d` path
    ///
    /// `path(v, v)` is the single-node path `[v]`.
    pub fn path(&self, s: NodeId, d: NodeId) -> Option<Path> {
        self.distance(s, d)?;

        let mut reversed = vec![d];
        let mut current = d;
        while current != s {
            current = self.predecessor[s][current]?;
            reversed.push(current);
            // a walk longer than n nodes means the table holds a negative cycle
            if reversed.len() > self.num_nodes {
                return None;
            }
        }
        reversed.reverse();
        Some(Path::from(reversed))
    }

    /// Builds a graph with an edge `s -> d` weighted by the shortest
    /// distance for every reachable ordered pair, self-pairs included
    pub fn to_complete_distances_graph(&self) -> Result<Graph, GraphError> {
        let mut complete = Graph::with_representation(self.num_nodes, Representation::Mixed);
        for s in 0..self.num_nodes {
            for d in 0..self.num_nodes {
                if let Some(distance) = self.distance(s, d) {
                    complete.add_edge(s, d, distance)?;
                }
            }
        }
        Ok(complete)
    }
}

impl Algorithm for AllPairsShortestPaths {
    fn name(&self) -> &'static str {
        "Floyd-Warshall All-Pairs Shortest Paths"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn set_parameter(&mut self, name: &str, _value: &str) -> Result<(), GraphError> {
        Err(GraphError::invalid_parameter(name, "Unknown parameter"))
    }

    fn get_parameter(&self, _name: &str) -> Option<String> {
        None
    }
}
