//! Induced subgraphs with node renumbering
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;

use crate::algorithm::traits::{GraphError, NodeId};
use crate::data_structures::graph::Graph;

/// Subgraph induced by a node set, renumbered densely
///
/// Sub-node `i` is the `i`-th smallest selected super-node.
#[derive(Debug, Clone)]
pub struct SubGraph {
    graph: Graph,
    super_nodes: Vec<NodeId>,
    sub_nodes: Vec<Option<NodeId>>,
}

impl SubGraph {
    /// Builds the subgraph of `graph` induced by `nodes`
    ///
    /// Duplicated nodes are ignored. The subgraph keeps the representation
    /// of `graph`, and undirected edges stay undirected.
    pub fn induced(graph: &Graph, nodes: impl IntoIterator<Item = NodeId>) -> Result<Self, GraphError> {
        let mut super_nodes: Vec<NodeId> = nodes.into_iter().collect();
        for &node in &super_nodes {
            graph.check_node(node)?;
        }
        super_nodes.sort_unstable();
        super_nodes.dedup();

        let mut sub_nodes = vec![None; graph.num_nodes()];
        for (sub, &node) in super_nodes.iter().enumerate() {
            sub_nodes[node] = Some(sub);
        }

        let mut sub_graph = Graph::with_representation(super_nodes.len(), graph.representation());
        for (sv, &v) in super_nodes.iter().enumerate() {
            for edge in graph.out_edges(v) {
                let Some(su) = sub_nodes[edge.target()] else {
                    continue;
                };
                if edge.is_directed() {
                    sub_graph.add_edge(sv, su, edge.weight())?;
                } else if sv <= su {
                    sub_graph.add_undirected_edge(sv, su, edge.weight())?;
                }
            }
        }

        trace!(
            "induced subgraph with {} of {} nodes and {} edges",
            sub_graph.num_nodes(),
            graph.num_nodes(),
            sub_graph.num_edges()
        );

        Ok(Self {
            graph: sub_graph,
            super_nodes,
            sub_nodes,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Selected super-nodes in ascending order
    pub fn super_nodes(&self) -> &[NodeId] {
        &self.super_nodes
    }

    /// # Panics
    ///
    /// Panics if `sub` is not a node of the subgraph.
    pub fn to_super_node(&self, sub: NodeId) -> NodeId {
        self.super_nodes[sub]
    }

    pub fn to_sub_node(&self, node: NodeId) -> Option<NodeId> {
        self.sub_nodes.get(node).copied().flatten()
    }
}
