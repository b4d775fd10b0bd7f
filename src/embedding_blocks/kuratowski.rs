use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::embedding::is_planar;
use crate::error::Result;
use crate::{EdgeLabel, UnGraph};

/// Given a graph, extracts a Kuratowski subgraph if the graph is not planar.
///
/// Returns `Ok(None)` for planar graphs. Otherwise edges are dropped one by
/// one, keeping only those whose removal would make the rest planar. The
/// result is an edge-minimal non-planar subgraph on the same vertex set,
/// hence a subdivision of K5 or K3,3 plus isolated vertices. Works in O(m)
/// planarity tests.
pub fn get_counterexample(graph: &UnGraph) -> Result<Option<UnGraph>> {
    if is_planar(graph)? {
        return Ok(None);
    }

    let mut edges: Vec<(NodeIndex, NodeIndex, EdgeLabel)> = graph
        .edge_indices()
        .filter_map(|e| {
            let (u, v) = graph.edge_endpoints(e)?;
            Some((u, v, graph[e]))
        })
        .collect();

    let mut i = 0;
    while i < edges.len() {
        let removed = edges.remove(i);
        if is_planar(&subgraph(graph, &edges))? {
            // needed for non-planarity
            edges.insert(i, removed);
            i += 1;
        }
    }

    debug!(edges = edges.len(), "extracted Kuratowski subgraph");
    Ok(Some(subgraph(graph, &edges)))
}

fn subgraph(graph: &UnGraph, edges: &[(NodeIndex, NodeIndex, EdgeLabel)]) -> UnGraph {
    let mut sub = UnGraph::with_capacity(graph.node_count(), edges.len());
    for v in graph.node_indices() {
        sub.add_node(graph[v]);
    }
    for &(u, v, label) in edges {
        sub.add_edge(u, v, label);
    }
    sub
}
