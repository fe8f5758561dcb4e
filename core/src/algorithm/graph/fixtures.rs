//! Graphs shared by the algorithm test modules

use proptest::prelude::*;

use crate::data_structures::graph::{Graph, Representation};

pub(crate) const ALL_REPRESENTATIONS: [Representation; 3] = [
    Representation::Lists,
    Representation::Matrix,
    Representation::Mixed,
];

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected 11-node graph: MST cost 39, connectivity 2, 4 colors,
/// max-flow(0, 6) = 12
pub(crate) fn eleven_nodes(representation: Representation) -> Graph {
    let mut graph = Graph::with_representation(11, representation);
    for (v, u, w) in [
        (0, 1, 4.0),
        (0, 2, 6.0),
        (0, 3, 9.0),
        (1, 2, 3.0),
        (1, 3, 7.0),
        (2, 3, 5.0),
        (3, 4, 2.0),
        (4, 5, 5.0),
        (5, 6, 4.0),
        (6, 7, 8.0),
        (7, 8, 3.0),
        (8, 9, 5.0),
        (9, 10, 1.0),
        (10, 0, 7.0),
        (5, 8, 10.0),
        (2, 7, 12.0),
    ] {
        graph.add_undirected_edge(v, u, w).unwrap();
    }
    graph
}

/// Directed 7-node network with max-flow(0, 6) = 12
pub(crate) fn seven_node_network(representation: Representation) -> Graph {
    let mut graph = Graph::with_representation(7, representation);
    for (v, u, w) in [
        (0, 1, 10.0),
        (0, 4, 50.0),
        (1, 4, 10.0),
        (1, 2, 10.0),
        (1, 3, 50.0),
        (2, 3, 10.0),
        (4, 5, 2.0),
        (5, 6, 50.0),
        (3, 6, 10.0),
    ] {
        graph.add_edge(v, u, w).unwrap();
    }
    graph
}

/// Random undirected graphs with 2 to `max_nodes` nodes and integer weights
pub(crate) fn arbitrary_undirected_graph(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (2..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 1u8..20), 0..(n * n)).prop_map(move |edges| {
            let mut graph = Graph::new(n);
            for (v, u, w) in edges {
                if v != u {
                    let _ = graph.add_undirected_edge(v, u, f64::from(w));
                }
            }
            graph
        })
    })
}
