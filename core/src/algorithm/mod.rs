//! Graph algorithm framework
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod path_finding;
pub mod traits;

pub use self::graph::*;
pub use self::path_finding::*;
pub use self::traits::*;
