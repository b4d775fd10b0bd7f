//! Fixtures shared by the tests of all modules.

pub mod checks;
pub mod families;
pub mod graph_enumerator;
pub mod random_graphs;

use petgraph::visit::EdgeRef;

use crate::{EdgeLabel, UnGraph, graph::WorkGraph};

/// Undirected graph on vertices `0..n`.
pub fn un_graph(n: usize, edges: &[(usize, usize)]) -> UnGraph {
    let mut graph = UnGraph::with_capacity(n, edges.len());
    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i as u32)).collect();
    for &(u, v) in edges {
        graph.add_edge(nodes[u], nodes[v], EdgeLabel::Real);
    }
    graph
}

/// Bidirected working copy of a simple graph.
pub fn work_graph(graph: &UnGraph) -> WorkGraph {
    let mut g = WorkGraph::with_vertices(graph.node_count());
    for e in graph.edge_references() {
        let (u, v) = (e.source().index(), e.target().index());
        g.add_edge(u, v).unwrap();
        g.add_edge(v, u).unwrap();
    }
    g
}
