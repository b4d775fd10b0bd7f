use crate::{graph::WorkGraph, palm_tree::PalmTree};

/// Sorts the adjacency lists of the graph by the lowpoints of the edges.
///
/// For an edge `(v, w)` the cost is `2 * dfsnum[w]` for a back edge,
/// `2 * lowpt1[w]` for a tree edge whose segment attaches only to `lowpt1[w]`
/// below `v`, and `2 * lowpt1[w] + 1` otherwise. Ties keep the current order.
pub(crate) fn make_adjacency_lists_acceptable(graph: &mut WorkGraph, palm_tree: &PalmTree) {
    let phi = |(v, w): (usize, usize)| -> usize {
        if palm_tree.dfsnum[w] < palm_tree.dfsnum[v] {
            2 * palm_tree.dfsnum[w]
        } else if palm_tree.lowpt2[w] >= palm_tree.dfsnum[v] {
            2 * palm_tree.lowpt1[w]
        } else {
            2 * palm_tree.lowpt1[w] + 1
        }
    };

    graph.sort_edges(phi);
}
