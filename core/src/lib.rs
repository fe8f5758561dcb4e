//! Graph algorithms engine
//!
//! A weighted graph store whose representation (adjacency lists, adjacency
//! matrix, or both) can be switched at any time, together with classic
//! algorithms running on it:
//!
//! - Floyd-Warshall all-pairs shortest paths with path reconstruction
//! - Edmonds-Karp maximum flow, with a vertex-disjoint augmenting search
//! - Prim minimum spanning tree on an indexed priority queue
//! - greedy coloring with breadth-first and least-constrained-first orders
//! - maximum bipartite matching through maximum flow
//! - edge and vertex connectivity
//!
//! ```
//! use graph_engine::{Graph, MinimumSpanningTree, Representation};
//!
//! let mut graph = Graph::with_representation(3, Representation::Mixed);
//! graph.add_undirected_edge(0, 1, 2.0)?;
//! graph.add_undirected_edge(1, 2, 1.0)?;
//! graph.add_undirected_edge(0, 2, 4.0)?;
//!
//! let mut mst = MinimumSpanningTree::new(&graph);
//! assert_eq!(mst.compute()?.cost(), 3.0);
//! # Ok::<(), graph_engine::GraphError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;

pub use algorithm::graph::{
    AugmentingSearch, Capacity, ColoringStrategy, Connectivity, HeuristicColoring, MatchingMethod,
    MaximumBipartiteMatching, MaximumFlow, MinimumSpanningTree, SpanningTree,
};
pub use algorithm::path_finding::AllPairsShortestPaths;
pub use algorithm::traits::{Algorithm, EdgeId, GraphError, NodeId};
pub use data_structures::{Edge, Graph, IndexedPriorityQueue, Path, Representation, SubGraph};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
