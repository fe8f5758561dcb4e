//! Graph storage and supporting containers
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod path;
pub mod priority_queue;
pub mod subgraph;

pub use self::graph::{Edge, Graph, OutEdges, Representation};
pub use self::path::Path;
pub use self::priority_queue::{HeapStats, IndexedPriorityQueue, PriorityQueueError};
pub use self::subgraph::SubGraph;
