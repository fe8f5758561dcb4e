//! Prim's minimum spanning tree
//!
//! Grows a tree from a root node, repeatedly attaching the node with the
//! cheapest known connection to the tree. Connection costs live in an
//! [`IndexedPriorityQueue`], so every improvement is a `decrease_key` and the
//! whole computation runs in O(E log V).
//!
//! The input is expected to be undirected. On a disconnected graph only the
//! root's component is spanned; see [`SpanningTree::is_spanning`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, GraphError, NodeId};
use crate::data_structures::graph::Graph;
use crate::data_structures::priority_queue::IndexedPriorityQueue;

/// Result of a spanning tree computation
#[derive(Debug, Clone)]
pub struct SpanningTree {
    tree: Graph,
    cost: f64,
    attached: usize,
}

impl SpanningTree {
    /// Undirected tree over the nodes of the input graph
    pub fn tree(&self) -> &Graph {
        &self.tree
    }

    /// Sum of the tree edge weights
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes reached from the root, root included
    pub fn attached(&self) -> usize {
        self.attached
    }

    /// `true` if the tree reaches every node of the input graph
    pub fn is_spanning(&self) -> bool {
        self.attached == self.tree.num_nodes()
    }
}

/// Counters of the last computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub nodes_attached: usize,
    pub key_updates: usize,
    pub unreachable_nodes: usize,
}

#[derive(Debug)]
pub struct MinimumSpanningTree<'a> {
    graph: &'a Graph,
    root: NodeId,
    result: Option<SpanningTree>,
    metrics: TreeMetrics,
}

impl<'a> MinimumSpanningTree<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            root: 0,
            result: None,
            metrics: TreeMetrics::default(),
        }
    }

    pub fn with_root(mut self, root: NodeId) -> Self {
        self.root = root;
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Builds the minimum spanning tree of the root's component
    ///
    /// An empty graph yields an empty tree whatever the root.
    pub fn compute(&mut self) -> Result<&SpanningTree, GraphError> {
        let n = self.graph.num_nodes();
        if n > 0 {
            self.graph.check_node(self.root)?;
        }

        let mut metrics = TreeMetrics::default();
        let mut tree = Graph::with_representation(n, self.graph.representation());
        let mut cost = 0.0;

        let mut key = vec![f64::INFINITY; n];
        let mut parent: Vec<Option<NodeId>> = vec![None; n];
        let mut queue = IndexedPriorityQueue::new(n);
        for node in 0..n {
            if node == self.root {
                key[node] = 0.0;
            }
            queue.push(node, key[node])?;
        }

        while let Some((node, node_key)) = queue.pop() {
            if node_key == f64::INFINITY {
                metrics.unreachable_nodes += 1;
                continue;
            }

            metrics.nodes_attached += 1;
            if let Some(linked) = parent[node] {
                tree.add_undirected_edge(linked, node, node_key)?;
                cost += node_key;
            }

            for edge in self.graph.out_edges(node) {
                let neighbor = edge.target();
                if queue.contains(neighbor) && edge.weight() < key[neighbor] {
                    key[neighbor] = edge.weight();
                    parent[neighbor] = Some(node);
                    queue.decrease_key(neighbor, edge.weight())?;
                    metrics.key_updates += 1;
                }
            }
        }

        if metrics.unreachable_nodes > 0 {
            warn!(
                "graph is disconnected: {} nodes unreachable from root {}",
                metrics.unreachable_nodes, self.root
            );
        }
        debug!(
            "Prim spanning tree from {} attached {} nodes with cost {}",
            self.root, metrics.nodes_attached, cost
        );

        self.metrics = metrics;
        Ok(self.result.insert(SpanningTree {
            tree,
            cost,
            attached: metrics.nodes_attached,
        }))
    }

    /// Last computed tree
    pub fn result(&self) -> Option<&SpanningTree> {
        self.result.as_ref()
    }

    pub fn metrics(&self) -> TreeMetrics {
        self.metrics
    }
}

impl Algorithm for MinimumSpanningTree<'_> {
    fn name(&self) -> &'static str {
        "Prim Minimum Spanning Tree"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["root"]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        match name {
            "root" => {
                let root: NodeId = value
                    .parse()
                    .map_err(|_| GraphError::invalid_parameter(name, "Must be a node index"))?;
                self.graph.check_node(root)?;
                self.root = root;
                Ok(())
            }
            _ => Err(GraphError::invalid_parameter(name, "Unknown parameter")),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "root" => Some(self.root.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::fixtures::{eleven_nodes, init_logger, ALL_REPRESENTATIONS};
    use crate::data_structures::graph::Representation;

    #[test]
    fn test_eleven_node_graph() {
        init_logger();
        for representation in ALL_REPRESENTATIONS {
            let graph = eleven_nodes(representation);
            let mut mst = MinimumSpanningTree::new(&graph);
            let result = mst.compute().unwrap();

            assert_eq!(result.cost(), 39.0);
            assert!(result.is_spanning());
            assert_eq!(result.tree().num_edges(), 10);
            assert!(result.tree().is_symmetrical());
            assert_eq!(result.tree().representation(), representation);
        }
    }

    #[test]
    fn test_cost_independent_of_root() {
        let graph = eleven_nodes(Representation::Lists);
        for root in graph.nodes() {
            let mut mst = MinimumSpanningTree::new(&graph).with_root(root);
            assert_eq!(mst.compute().unwrap().cost(), 39.0, "root {}", root);
        }
    }

    #[test]
    fn test_tree_edges_come_from_graph() {
        let graph = eleven_nodes(Representation::Matrix);
        let mut mst = MinimumSpanningTree::new(&graph);
        mst.compute().unwrap();

        let tree = mst.result().unwrap().tree();
        for edge in tree.edges() {
            assert_eq!(graph.length(edge.source(), edge.target()), Some(edge.weight()));
        }
        assert_eq!(mst.metrics().nodes_attached, 11);
        assert_eq!(mst.metrics().unreachable_nodes, 0);
    }

    #[test]
    fn test_disconnected_graph() {
        let mut graph = Graph::new(5);
        graph.add_undirected_edge(0, 1, 2.0).unwrap();
        graph.add_undirected_edge(1, 2, 3.0).unwrap();
        graph.add_undirected_edge(0, 2, 1.0).unwrap();
        graph.add_undirected_edge(3, 4, 7.0).unwrap();

        let mut mst = MinimumSpanningTree::new(&graph);
        let result = mst.compute().unwrap();
        assert_eq!(result.cost(), 3.0);
        assert_eq!(result.attached(), 3);
        assert!(!result.is_spanning());
        assert!(!result.tree().exists_edge(3, 4));
        assert_eq!(mst.metrics().unreachable_nodes, 2);

        let mut other = MinimumSpanningTree::new(&graph).with_root(4);
        assert_eq!(other.compute().unwrap().cost(), 7.0);
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = Graph::new(0);
        let mut mst = MinimumSpanningTree::new(&empty);
        assert_eq!(mst.compute().unwrap().cost(), 0.0);

        let single = Graph::new(1);
        let mut mst = MinimumSpanningTree::new(&single);
        let result = mst.compute().unwrap();
        assert!(result.is_spanning());
        assert_eq!(result.tree().num_edges(), 0);
    }

    #[test]
    fn test_invalid_root() {
        let graph = eleven_nodes(Representation::Lists);
        let mut mst = MinimumSpanningTree::new(&graph).with_root(11);
        assert_eq!(
            mst.compute().unwrap_err(),
            GraphError::InvalidNode { node: 11, num_nodes: 11 }
        );
        assert!(mst.result().is_none());
    }

    #[test]
    fn test_string_parameters() {
        let graph = eleven_nodes(Representation::Lists);
        let mut mst = MinimumSpanningTree::new(&graph);

        mst.set_parameter("root", "3").unwrap();
        assert_eq!(mst.root(), 3);
        assert_eq!(mst.get_parameter("root").as_deref(), Some("3"));

        assert!(matches!(
            mst.set_parameter("root", "three"),
            Err(GraphError::InvalidParameter { .. })
        ));
        assert!(matches!(
            mst.set_parameter("root", "40"),
            Err(GraphError::InvalidNode { .. })
        ));
    }
}
