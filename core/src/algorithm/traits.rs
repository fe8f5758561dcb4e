//! Core definitions shared by the graph store and every algorithm
//!
//! Nodes are dense indices, edges carry a sequential identifier, and every
//! fallible operation reports a [`GraphError`]. Algorithms expose their
//! tunable options through the string-keyed [`Algorithm`] trait in addition
//! to their typed builder setters.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::Debug;

use crate::data_structures::priority_queue::PriorityQueueError;

/// Dense node index in `[0, n)`
pub type NodeId = usize;

/// Sequential edge identifier, shared by both halves of an undirected edge
pub type EdgeId = usize;

/// Error taxonomy for graph construction and algorithm preconditions
///
/// Unreachability is not an error: path queries return `Option` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid node: {node} (graph has {num_nodes} nodes)")]
    InvalidNode { node: NodeId, num_nodes: usize },

    #[error("Edge from {0} to {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Edge from {0} to {1} not found")]
    EdgeNotFound(NodeId, NodeId),

    #[error("Graph is not bipartite: bfs coloring used {0} colors")]
    NotBipartite(usize),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    PriorityQueue(#[from] PriorityQueueError),
}

impl GraphError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        GraphError::InvalidParameter {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Uniform configuration surface for the algorithm structs
///
/// Parameter values are plain strings so that callers configuring algorithms
/// from parsed experiment descriptions need no knowledge of the option enums.
pub trait Algorithm: Debug {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the names of the parameters accepted by [`Algorithm::set_parameter`]
    fn parameters(&self) -> &'static [&'static str];

    /// Sets a parameter, validating both its name and its value
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GraphError>;

    /// Gets the current value of a parameter
    fn get_parameter(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidNode { node: 7, num_nodes: 3 };
        assert_eq!(err.to_string(), "Invalid node: 7 (graph has 3 nodes)");

        let err = GraphError::DuplicateEdge(1, 2);
        assert_eq!(err.to_string(), "Edge from 1 to 2 already exists");

        let err = GraphError::invalid_parameter("root", "must be a node index");
        assert_eq!(err.to_string(), "Invalid parameter: root - must be a node index");
    }

    #[test]
    fn test_priority_queue_error_conversion() {
        let err: GraphError = PriorityQueueError::ElementNotFound(4).into();
        assert!(matches!(err, GraphError::PriorityQueue(_)));
        assert_eq!(err.to_string(), "Element 4 is not in the queue");
    }
}
