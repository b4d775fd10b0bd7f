use fixedbitset::FixedBitSet;

use crate::embedding_blocks::acceptable_adj::make_adjacency_lists_acceptable;
use crate::error::{PlanarityError, Result};
use crate::graph::{Edge, WorkGraph, target};

/// DFS tables of a palm tree.
///
/// All tables are indexed by vertex of the [`WorkGraph`] they were computed for:
/// - `dfsnum[v]` - the order of the vertex in the DFS traversal (preorder number),
/// - `parent[v]` - the DFS parent, `None` for the root,
/// - `lowpt1[v]` - the smallest `dfsnum` reachable from the subtree of `v` via at most one non-tree edge,
/// - `lowpt2[v]` - the second smallest such value, `lowpt1[v] <= lowpt2[v]`.
///
/// Unreached vertices keep `usize::MAX` numbers.
#[derive(Debug, Clone)]
pub struct PalmTree {
    pub dfsnum: Vec<usize>,
    pub parent: Vec<Option<usize>>,
    pub lowpt1: Vec<usize>,
    pub lowpt2: Vec<usize>,
    generation: u64,
}

impl PalmTree {
    fn new(graph_size: usize) -> Self {
        Self {
            dfsnum: vec![usize::MAX; graph_size],
            parent: vec![None; graph_size],
            lowpt1: vec![usize::MAX; graph_size],
            lowpt2: vec![usize::MAX; graph_size],
            generation: 0,
        }
    }

    /// `true` iff `e` leads from a vertex to a vertex with a higher DFS number.
    pub fn is_tree_edge(&self, e: Edge) -> bool {
        self.dfsnum[e.0] < self.dfsnum[e.1]
    }

    /// Fails unless the tables were computed for the current state of `graph`.
    pub(crate) fn check_fresh(&self, graph: &WorkGraph) -> Result<()> {
        if self.generation != graph.generation() || self.dfsnum.len() != graph.vertex_bound() {
            return Err(PlanarityError::StaleTables(format!(
                "tables are for generation {}, graph is at generation {}",
                self.generation,
                graph.generation()
            )));
        }
        Ok(())
    }

    /// Parent of a non-root vertex; a missing parent means the tables do not
    /// describe this graph.
    pub(crate) fn parent_of(&self, v: usize) -> Result<usize> {
        self.parent
            .get(v)
            .copied()
            .flatten()
            .ok_or_else(|| PlanarityError::StaleTables(format!("vertex {v} has no DFS parent")))
    }
}

/// Computes the palm tree of a biconnected bidirected graph and reorders it.
///
/// Runs a DFS from the first vertex computing `dfsnum`, `parent`, `lowpt1` and
/// `lowpt2`, collecting all forward edges and all reversals of tree edges on
/// the way. Those edges are deleted afterwards, leaving every undirected edge
/// oriented either down the tree or back towards the root. Finally the
/// adjacency lists are sorted so that the first edge of every vertex leads to
/// its lowest attachment.
pub fn reorder(graph: &mut WorkGraph) -> Result<PalmTree> {
    let mut palm_tree = PalmTree::new(graph.vertex_bound());
    let Some(root) = graph.first_node() else {
        palm_tree.generation = graph.generation();
        return Ok(palm_tree);
    };

    let doomed = dfs(graph, root, &mut palm_tree);

    // remove forward and reversals of tree edges
    graph.remove_edges(&doomed)?;

    make_adjacency_lists_acceptable(graph, &palm_tree);
    palm_tree.generation = graph.generation();

    Ok(palm_tree)
}

/// Iterative version of the two-pass DFS. Returns the edges to delete.
///
/// A frame is `(vertex, position in its adjacency list)`. When a frame is
/// exhausted every child is finished, so the second pass computing `lowpt2`
/// runs right before popping it.
fn dfs(graph: &WorkGraph, root: usize, palm_tree: &mut PalmTree) -> Vec<Edge> {
    fn enter(v: usize, time: &mut usize, reached: &mut FixedBitSet, palm_tree: &mut PalmTree) {
        palm_tree.dfsnum[v] = *time;
        palm_tree.lowpt1[v] = *time;
        palm_tree.lowpt2[v] = *time;
        reached.insert(v);
        *time += 1;
    }

    let mut reached = FixedBitSet::with_capacity(graph.vertex_bound());
    let mut time = 0;
    let mut doomed = Vec::new();

    enter(root, &mut time, &mut reached, palm_tree);
    let mut stack = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let v = frame.0;

        if let Some(&e) = graph.adj_edges(v).get(frame.1) {
            frame.1 += 1;
            let w = target(e);

            if !reached.contains(w) {
                // e is a tree edge
                palm_tree.parent[w] = Some(v);
                enter(w, &mut time, &mut reached, palm_tree);
                stack.push((w, 0));
            } else {
                // no effect for forward edges
                palm_tree.lowpt1[v] = palm_tree.lowpt1[v].min(palm_tree.dfsnum[w]);
                if palm_tree.dfsnum[w] >= palm_tree.dfsnum[v] || Some(w) == palm_tree.parent[v] {
                    doomed.push(e);
                }
            }
            continue;
        }

        stack.pop();
        second_pass(graph, v, palm_tree);

        if let Some(p) = palm_tree.parent[v] {
            palm_tree.lowpt1[p] = palm_tree.lowpt1[p].min(palm_tree.lowpt1[v]);
        }
    }

    doomed
}

/// We know `lowpt1[v]` at this point and make a second pass over all edges
/// leaving `v` to compute `lowpt2[v]`.
fn second_pass(graph: &WorkGraph, v: usize, palm_tree: &mut PalmTree) {
    for &e in graph.adj_edges(v) {
        let w = target(e);
        if palm_tree.parent[w] == Some(v) {
            // tree edge
            if palm_tree.lowpt1[w] != palm_tree.lowpt1[v] {
                palm_tree.lowpt2[v] = palm_tree.lowpt2[v].min(palm_tree.lowpt1[w]);
            }
            palm_tree.lowpt2[v] = palm_tree.lowpt2[v].min(palm_tree.lowpt2[w]);
        } else if palm_tree.lowpt1[v] != palm_tree.dfsnum[w] {
            palm_tree.lowpt2[v] = palm_tree.lowpt2[v].min(palm_tree.dfsnum[w]);
        }
    }
}
