//! Flow, tree, coloring and connectivity algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

#[cfg(test)]
pub(crate) mod fixtures;

pub mod coloring;
pub mod connectivity;
pub mod matching;
pub mod max_flow;
pub mod mst;

pub use self::coloring::{ColoringStrategy, HeuristicColoring};
pub use self::connectivity::Connectivity;
pub use self::matching::{MatchingMethod, MaximumBipartiteMatching};
pub use self::max_flow::{capacity_limit, AugmentingSearch, Capacity, FlowMetrics, MaximumFlow};
pub use self::mst::{MinimumSpanningTree, SpanningTree, TreeMetrics};
