//! Shortest-path algorithms over weighted graphs
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod all_pairs;

pub use self::all_pairs::AllPairsShortestPaths;
