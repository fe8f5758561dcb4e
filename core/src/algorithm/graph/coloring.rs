//! Greedy vertex coloring heuristics
//!
//! Every strategy visits the nodes in some order and gives each one the
//! smallest color not already used by a colored successor. The strategies
//! differ only in the visiting order:
//!
//! - **Bfs**: breadth-first from each uncolored component root, which yields
//!   a 2-coloring of any bipartite graph
//! - **LeastConstrainedFirst**: one queue over all nodes keyed by the number
//!   of still uncolored successors
//! - **DynamicLeastConstrainedFirst**: grows one component at a time from the
//!   least constrained unreached node, queueing nodes as they are reached
//!
//! Colors are positive integers; 0 means uncolored.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::Graph;
use crate::data_structures::priority_queue::IndexedPriorityQueue;

pub const UNCOLORED: usize = 0;

/// Node visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColoringStrategy {
    #[default]
    Bfs,
    LeastConstrainedFirst,
    DynamicLeastConstrainedFirst,
}

impl fmt::Display for ColoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColoringStrategy::Bfs => "bfs",
            ColoringStrategy::LeastConstrainedFirst => "lcf",
            ColoringStrategy::DynamicLeastConstrainedFirst => "lcfx",
        };
        f.write_str(name)
    }
}

impl FromStr for ColoringStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(ColoringStrategy::Bfs),
            "lcf" | "least_constrained_first" => Ok(ColoringStrategy::LeastConstrainedFirst),
            "lcfx" | "dynamic_least_constrained_first" => Ok(ColoringStrategy::DynamicLeastConstrainedFirst),
            _ => Err(GraphError::invalid_parameter(
                "strategy",
                "Must be 'bfs', 'lcf' or 'lcfx'",
            )),
        }
    }
}

/// Progress of a node in the dynamic strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unreached,
    Queued,
    Colored,
}

/// Heuristic coloring of a borrowed graph
#[derive(Debug)]
pub struct HeuristicColoring<'a> {
    graph: &'a Graph,
    strategy: ColoringStrategy,
    colors: Vec<usize>,
    max_color: usize,
}

impl<'a> HeuristicColoring<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            strategy: ColoringStrategy::default(),
            colors: vec![UNCOLORED; graph.num_nodes()],
            max_color: 0,
        }
    }

    pub fn with_strategy(mut self, strategy: ColoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ColoringStrategy {
        self.strategy
    }

    /// Colors every node and returns the number of colors used
    pub fn compute(&mut self) -> Result<usize, GraphError> {
        self.colors.fill(UNCOLORED);
        self.max_color = 0;

        match self.strategy {
            ColoringStrategy::Bfs => self.color_breadth_first(),
            ColoringStrategy::LeastConstrainedFirst => self.color_least_constrained_first()?,
            ColoringStrategy::DynamicLeastConstrainedFirst => self.color_dynamic_least_constrained_first()?,
        }

        debug!(
            "{} coloring of {} nodes used {} colors",
            self.strategy,
            self.graph.num_nodes(),
            self.max_color
        );
        Ok(self.max_color)
    }

    /// Number of colors used by the last computation
    pub fn max_color(&self) -> usize {
        self.max_color
    }

    /// Color of `node`, `None` for out-of-range nodes
    pub fn color(&self, node: NodeId) -> Option<usize> {
        self.colors.get(node).copied()
    }

    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// `true` if every node is colored and no edge joins two distinct
    /// nodes of the same color
    pub fn is_proper(&self) -> bool {
        self.colors.iter().all(|&color| color != UNCOLORED)
            && self.graph.edges().all(|edge| {
                edge.source() == edge.target() || self.colors[edge.source()] != self.colors[edge.target()]
            })
    }

    fn min_color(&self, node: NodeId) -> usize {
        let mut used = vec![false; self.graph.out_degree(node) + 2];
        for successor in self.graph.successors(node) {
            let color = self.colors[successor];
            if color < used.len() {
                used[color] = true;
            }
        }
        (1..used.len()).find(|&color| !used[color]).unwrap_or(used.len())
    }

    fn assign(&mut self, node: NodeId) {
        let color = self.min_color(node);
        self.colors[node] = color;
        self.max_color = self.max_color.max(color);
    }

    fn color_breadth_first(&mut self) {
        let n = self.graph.num_nodes();
        let mut reached = vec![false; n];
        let mut queue = VecDeque::new();

        for root in 0..n {
            if reached[root] {
                continue;
            }
            reached[root] = true;
            queue.push_back(root);

            while let Some(node) = queue.pop_front() {
                self.assign(node);
                for successor in self.graph.successors(node) {
                    if !reached[successor] {
                        reached[successor] = true;
                        queue.push_back(successor);
                    }
                }
            }
        }
    }

    fn color_least_constrained_first(&mut self) -> Result<(), GraphError> {
        let n = self.graph.num_nodes();
        let mut remaining: Vec<i64> = self.graph.nodes().map(|v| self.graph.out_degree(v) as i64).collect();
        let mut queue = IndexedPriorityQueue::new(n);
        for node in 0..n {
            queue.push(node, remaining[node])?;
        }

        while let Some((node, _)) = queue.pop() {
            self.assign(node);
            for successor in self.graph.successors(node) {
                if self.colors[successor] == UNCOLORED {
                    remaining[successor] -= 1;
                    queue.decrease_key(successor, remaining[successor])?;
                }
            }
        }
        Ok(())
    }

    fn color_dynamic_least_constrained_first(&mut self) -> Result<(), GraphError> {
        let n = self.graph.num_nodes();
        let mut remaining: Vec<i64> = self.graph.nodes().map(|v| self.graph.out_degree(v) as i64).collect();
        let mut state = vec![NodeState::Unreached; n];
        let mut queue = IndexedPriorityQueue::new(n);

        // the earliest node with the smallest remaining degree starts each component
        while let Some(start) = (0..n)
            .filter(|&v| state[v] == NodeState::Unreached)
            .min_by_key(|&v| remaining[v])
        {
            queue.push(start, remaining[start])?;
            state[start] = NodeState::Queued;

            while let Some((node, _)) = queue.pop() {
                self.assign(node);
                state[node] = NodeState::Colored;

                for successor in self.graph.successors(node) {
                    remaining[successor] -= 1;
                    match state[successor] {
                        NodeState::Unreached => {
                            queue.push(successor, remaining[successor])?;
                            state[successor] = NodeState::Queued;
                        }
                        NodeState::Queued => queue.decrease_key(successor, remaining[successor])?,
                        NodeState::Colored => {}
                    }
                }
            }
        }
        Ok(())
    }
}

impl Algorithm for HeuristicColoring<'_> {
    fn name(&self) -> &'static str {
        "Heuristic Coloring"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["strategy"]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        match name {
            "strategy" => {
                self.strategy = value.parse()?;
                Ok(())
            }
            _ => Err(GraphError::invalid_parameter(name, "Unknown parameter")),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "strategy" => Some(self.strategy.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::fixtures::{
        arbitrary_undirected_graph, eleven_nodes, init_logger, ALL_REPRESENTATIONS,
    };
    use proptest::prelude::*;

    const ALL_STRATEGIES: [ColoringStrategy; 3] = [
        ColoringStrategy::Bfs,
        ColoringStrategy::LeastConstrainedFirst,
        ColoringStrategy::DynamicLeastConstrainedFirst,
    ];

    #[test]
    fn test_eleven_node_graph_uses_four_colors() {
        init_logger();
        for representation in ALL_REPRESENTATIONS {
            let graph = eleven_nodes(representation);
            for strategy in ALL_STRATEGIES {
                let mut coloring = HeuristicColoring::new(&graph).with_strategy(strategy);
                assert_eq!(coloring.compute().unwrap(), 4, "{} on {:?}", strategy, representation);
                assert_eq!(coloring.max_color(), 4);
                assert!(coloring.is_proper());
            }
        }
    }

    #[test]
    fn test_bfs_two_colors_even_cycle() {
        let mut graph = Graph::new(6);
        for v in 0..6 {
            graph.add_undirected_edge(v, (v + 1) % 6, 1.0).unwrap();
        }
        let mut coloring = HeuristicColoring::new(&graph);
        assert_eq!(coloring.compute().unwrap(), 2);
        assert_eq!(coloring.colors(), &[1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_isolated_nodes_and_empty_graph() {
        let graph = Graph::new(3);
        for strategy in ALL_STRATEGIES {
            let mut coloring = HeuristicColoring::new(&graph).with_strategy(strategy);
            assert_eq!(coloring.compute().unwrap(), 1);
            assert_eq!(coloring.colors(), &[1, 1, 1]);
        }

        let empty = Graph::new(0);
        let mut coloring = HeuristicColoring::new(&empty);
        assert_eq!(coloring.compute().unwrap(), 0);
        assert!(coloring.is_proper());
        assert_eq!(coloring.color(0), None);
    }

    #[test]
    fn test_complete_graph_needs_n_colors() {
        let mut graph = Graph::new(5);
        for v in 0..5 {
            for u in (v + 1)..5 {
                graph.add_undirected_edge(v, u, 1.0).unwrap();
            }
        }
        for strategy in ALL_STRATEGIES {
            let mut coloring = HeuristicColoring::new(&graph).with_strategy(strategy);
            assert_eq!(coloring.compute().unwrap(), 5);
        }
    }

    #[test]
    fn test_string_parameters() {
        let graph = Graph::new(1);
        let mut coloring = HeuristicColoring::new(&graph);

        coloring.set_parameter("strategy", "LCFX").unwrap();
        assert_eq!(coloring.strategy(), ColoringStrategy::DynamicLeastConstrainedFirst);
        assert_eq!(coloring.get_parameter("strategy").as_deref(), Some("lcfx"));

        assert!(matches!(
            coloring.set_parameter("strategy", "random"),
            Err(GraphError::InvalidParameter { .. })
        ));
        assert!(coloring.set_parameter("seed", "1").is_err());
        assert_eq!(coloring.parameters(), &["strategy"]);
    }

    proptest! {
        #[test]
        fn test_every_strategy_is_proper(graph in arbitrary_undirected_graph(12)) {
            for strategy in ALL_STRATEGIES {
                let mut coloring = HeuristicColoring::new(&graph).with_strategy(strategy);
                let colors = coloring.compute().unwrap();
                prop_assert!(coloring.is_proper());
                prop_assert!(colors <= graph.nodes().map(|v| graph.out_degree(v)).max().unwrap_or(0) + 1);
            }
        }
    }
}
