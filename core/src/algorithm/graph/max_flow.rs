//! Edmonds-Karp maximum flow
//!
//! Capacities are the edge weights cast to [`Capacity`]. Each round runs a
//! breadth-first search for a shortest augmenting path in the residual
//! network and pushes its bottleneck, until no augmenting path remains.
//! The flow and residual networks are dense matrices, so a computation
//! costs O(n^2) memory and O(V E^2) time in the worst case.
//!
//! [`AugmentingSearch::VertexDisjoint`] replaces the search with one that
//! lets at most one unit of flow through every intermediate node. On a
//! graph with unit capacities its flow value is the number of internally
//! vertex-disjoint paths between source and sink.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::{Graph, Representation};

/// Integral flow capacity
///
/// Edge weights are converted with an `as` cast: fractions truncate toward
/// zero and NaN becomes 0. The result is then clamped to
/// `0..=capacity_limit(n)` on a graph of `n` nodes, so no residual capacity
/// or flow value can overflow.
pub type Capacity = i64;

/// Largest capacity an edge keeps in a graph of `n` nodes
///
/// A residual capacity never exceeds the sum of both directions of an edge,
/// and a flow value never exceeds the sum of the source's `n` out-edges, so
/// both stay at most `Capacity::MAX / 2`.
pub fn capacity_limit(n: usize) -> Capacity {
    Capacity::MAX / (2 * n.max(1) as Capacity)
}

/// Residual-path search used by each augmentation round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AugmentingSearch {
    /// Any residual edge with positive capacity may be used
    #[default]
    Standard,
    /// Every intermediate node carries at most one unit of flow
    VertexDisjoint,
}

impl fmt::Display for AugmentingSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AugmentingSearch::Standard => f.write_str("standard"),
            AugmentingSearch::VertexDisjoint => f.write_str("vertex_disjoint"),
        }
    }
}

impl FromStr for AugmentingSearch {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(AugmentingSearch::Standard),
            "vertex_disjoint" | "visit_once" => Ok(AugmentingSearch::VertexDisjoint),
            _ => Err(GraphError::invalid_parameter(
                "search",
                "Must be 'standard' or 'vertex_disjoint'",
            )),
        }
    }
}

/// Counters of the last computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMetrics {
    pub augmenting_paths: usize,
    pub nodes_explored: usize,
    pub flow_value: Capacity,
}

/// Maximum flow between two nodes of a borrowed graph
#[derive(Debug)]
pub struct MaximumFlow<'a> {
    graph: &'a Graph,
    search: AugmentingSearch,
    /// Antisymmetric: `flow[u][v] == -flow[v][u]`
    flow: Vec<Vec<Capacity>>,
    residual: Vec<Vec<Capacity>>,
    /// Units of flow committed through each node, vertex-disjoint search only
    inflow: Vec<i64>,
    /// Inflow counters updated while the current search explores
    tentative_inflow: Vec<i64>,
    visited: Vec<bool>,
    parent: Vec<Option<NodeId>>,
    bottleneck: Vec<Capacity>,
    flow_value: Capacity,
    metrics: FlowMetrics,
}

impl<'a> MaximumFlow<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let n = graph.num_nodes();
        Self {
            graph,
            search: AugmentingSearch::default(),
            flow: vec![vec![0; n]; n],
            residual: vec![vec![0; n]; n],
            inflow: vec![0; n],
            tentative_inflow: vec![0; n],
            visited: vec![false; n],
            parent: vec![None; n],
            bottleneck: vec![0; n],
            flow_value: 0,
            metrics: FlowMetrics::default(),
        }
    }

    pub fn with_search(mut self, search: AugmentingSearch) -> Self {
        self.search = search;
        self
    }

    pub fn search(&self) -> AugmentingSearch {
        self.search
    }

    /// Computes a maximum flow from `source` to `sink` with the configured search
    ///
    /// A computation where `source == sink` has value 0.
    pub fn compute(&mut self, source: NodeId, sink: NodeId) -> Result<Capacity, GraphError> {
        self.run(source, sink, self.search)
    }

    /// Computes a maximum flow with the vertex-disjoint search, whatever
    /// search is configured
    pub fn compute_vertex_disjoint(&mut self, source: NodeId, sink: NodeId) -> Result<Capacity, GraphError> {
        self.run(source, sink, AugmentingSearch::VertexDisjoint)
    }

    fn run(&mut self, source: NodeId, sink: NodeId, search: AugmentingSearch) -> Result<Capacity, GraphError> {
        self.graph.check_node(source)?;
        self.graph.check_node(sink)?;
        self.reset();

        if source == sink {
            debug!("source and sink are both {}, flow is 0", source);
            return Ok(0);
        }

        loop {
            let found = match search {
                AugmentingSearch::Standard => self.standard_search(source, sink),
                AugmentingSearch::VertexDisjoint => self.vertex_disjoint_search(source, sink),
            };
            if !found {
                break;
            }
            self.augment(source, sink, search == AugmentingSearch::VertexDisjoint);
        }

        self.metrics.flow_value = self.flow_value;
        debug!(
            "{} max flow {} -> {} is {} after {} augmenting paths",
            search, source, sink, self.flow_value, self.metrics.augmenting_paths
        );
        Ok(self.flow_value)
    }

    fn reset(&mut self) {
        for row in self.flow.iter_mut() {
            row.fill(0);
        }
        for row in self.residual.iter_mut() {
            row.fill(0);
        }
        let limit = capacity_limit(self.graph.num_nodes());
        for edge in self.graph.edges() {
            self.residual[edge.source()][edge.target()] = (edge.weight() as Capacity).clamp(0, limit);
        }
        self.inflow.fill(0);
        self.flow_value = 0;
        self.metrics = FlowMetrics::default();
    }

    fn begin_search(&mut self, source: NodeId, initial_bottleneck: Capacity) -> VecDeque<NodeId> {
        self.visited.fill(false);
        self.parent.fill(None);
        self.bottleneck.fill(initial_bottleneck);
        self.visited[source] = true;
        VecDeque::from([source])
    }

    fn reach(&mut self, from: NodeId, to: NodeId) {
        self.visited[to] = true;
        self.parent[to] = Some(from);
        self.metrics.nodes_explored += 1;
    }

    fn standard_search(&mut self, source: NodeId, sink: NodeId) -> bool {
        let n = self.graph.num_nodes();
        let mut queue = self.begin_search(source, Capacity::MAX);

        while let Some(v) = queue.pop_front() {
            for u in 0..n {
                if self.visited[u] || self.residual[v][u] <= 0 {
                    continue;
                }
                self.bottleneck[u] = self.bottleneck[v].min(self.residual[v][u]);
                self.reach(v, u);
                if u == sink {
                    return true;
                }
                queue.push_back(u);
            }
        }
        false
    }

    /// Searches a path of unit capacity that enters every intermediate node
    /// at most once
    ///
    /// A node that already carries flow may only be left by walking back
    /// along the flow entering it ("return" step). Any other node may be
    /// left through unused residual capacity ("forward" step). The
    /// augmentation commits the tentative counters of the nodes on the path.
    fn vertex_disjoint_search(&mut self, source: NodeId, sink: NodeId) -> bool {
        let n = self.graph.num_nodes();
        let mut queue = self.begin_search(source, 1);
        self.tentative_inflow.copy_from_slice(&self.inflow);

        while let Some(v) = queue.pop_front() {
            for u in 0..n {
                if self.visited[u] {
                    continue;
                }
                if self.tentative_inflow[v] > 1 && self.flow[v][u] < 0 {
                    self.tentative_inflow[v] -= 1;
                } else if self.tentative_inflow[v] <= 1 && self.residual[v][u] > 0 {
                    self.tentative_inflow[u] += 1;
                } else {
                    continue;
                }
                self.reach(v, u);
                if u == sink {
                    return true;
                }
                queue.push_back(u);
            }
        }
        false
    }

    fn augment(&mut self, source: NodeId, sink: NodeId, commit_inflow: bool) {
        let increment = self.bottleneck[sink];
        let mut v = sink;
        while v != source {
            let Some(p) = self.parent[v] else {
                break;
            };
            self.flow[p][v] += increment;
            self.flow[v][p] -= increment;
            self.residual[p][v] -= increment;
            self.residual[v][p] += increment;
            if commit_inflow {
                self.inflow[v] = self.tentative_inflow[v];
            }
            v = p;
        }

        self.flow_value += increment;
        self.metrics.augmenting_paths += 1;
        trace!("augmented {} units, total {}", increment, self.flow_value);
    }

    /// Value of the last computed flow
    pub fn flow_value(&self) -> Capacity {
        self.flow_value
    }

    /// Net flow sent along `u -> v`, 0 if none or out of range
    pub fn flow(&self, u: NodeId, v: NodeId) -> Capacity {
        self.flow
            .get(u)
            .and_then(|row| row.get(v))
            .map_or(0, |&flow| flow.max(0))
    }

    /// Graph of every edge carrying positive flow, weighted by that flow
    pub fn flow_graph(&self, representation: Representation) -> Result<Graph, GraphError> {
        let n = self.graph.num_nodes();
        let mut flow_graph = Graph::with_representation(n, representation);
        for u in 0..n {
            for v in 0..n {
                if self.flow[u][v] > 0 {
                    flow_graph.add_edge(u, v, self.flow[u][v] as f64)?;
                }
            }
        }
        Ok(flow_graph)
    }

    pub fn metrics(&self) -> FlowMetrics {
        self.metrics
    }
}

impl Algorithm for MaximumFlow<'_> {
    fn name(&self) -> &'static str {
        "Edmonds-Karp Maximum Flow"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["search"]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        match name {
            "search" => {
                self.search = value.parse()?;
                Ok(())
            }
            _ => Err(GraphError::invalid_parameter(name, "Unknown parameter")),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "search" => Some(self.search.to_string()),
            _ => None,
        }
    }
}
