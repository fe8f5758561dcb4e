//! Edge and vertex connectivity through unit-capacity maximum flows
//!
//! Every weight is replaced by 1, so the maximum flow between two nodes
//! counts edge-disjoint paths, and the vertex-disjoint search counts
//! internally vertex-disjoint paths. Global values take the minimum over all
//! ordered pairs of distinct nodes; averages divide the sum by `n^2 - n`.
//! Graphs with fewer than two nodes have connectivity 0.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use super::max_flow::{AugmentingSearch, Capacity, MaximumFlow};
use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::Graph;

/// Copy of `graph` with the same topology and every weight set to 1
pub fn to_unitary_edges(graph: &Graph) -> Graph {
    graph.map_weights(|_| 1.0)
}

#[derive(Debug)]
pub struct Connectivity<'a> {
    graph: &'a Graph,
    unitary: Graph,
}

impl<'a> Connectivity<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            unitary: to_unitary_edges(graph),
        }
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Unit-weight graph the flows run on
    pub fn unitary_graph(&self) -> &Graph {
        &self.unitary
    }

    /// Number of edge-disjoint paths from `u` to `v`
    pub fn edge_connectivity_between(&self, u: NodeId, v: NodeId) -> Result<Capacity, GraphError> {
        MaximumFlow::new(&self.unitary).compute(u, v)
    }

    /// Number of internally vertex-disjoint paths from `u` to `v`
    pub fn vertex_connectivity_between(&self, u: NodeId, v: NodeId) -> Result<Capacity, GraphError> {
        MaximumFlow::new(&self.unitary).compute_vertex_disjoint(u, v)
    }

    pub fn edge_connectivity(&self) -> Result<Capacity, GraphError> {
        let values = self.pairwise(AugmentingSearch::Standard)?;
        Ok(values.into_iter().min().unwrap_or(0))
    }

    pub fn vertex_connectivity(&self) -> Result<Capacity, GraphError> {
        let values = self.pairwise(AugmentingSearch::VertexDisjoint)?;
        Ok(values.into_iter().min().unwrap_or(0))
    }

    pub fn average_edge_connectivity(&self) -> Result<f64, GraphError> {
        let values = self.pairwise(AugmentingSearch::Standard)?;
        Ok(average(&values))
    }

    pub fn average_vertex_connectivity(&self) -> Result<f64, GraphError> {
        let values = self.pairwise(AugmentingSearch::VertexDisjoint)?;
        Ok(average(&values))
    }

    /// Flow value of every ordered pair of distinct nodes
    fn pairwise(&self, search: AugmentingSearch) -> Result<Vec<Capacity>, GraphError> {
        let n = self.unitary.num_nodes();
        let mut max_flow = MaximumFlow::new(&self.unitary).with_search(search);
        let mut values = Vec::with_capacity(n * n.saturating_sub(1));

        for u in 0..n {
            for v in 0..n {
                if u != v {
                    values.push(max_flow.compute(u, v)?);
                }
            }
        }

        debug!(
            "{} connectivity over {} ordered pairs, minimum {:?}",
            search,
            values.len(),
            values.iter().min()
        );
        Ok(values)
    }
}

fn average(values: &[Capacity]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<Capacity>() as f64 / values.len() as f64
}

impl Algorithm for Connectivity<'_> {
    fn name(&self) -> &'static str {
        "Flow Connectivity"
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
