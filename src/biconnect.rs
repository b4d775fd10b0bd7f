use fixedbitset::FixedBitSet;

use crate::error::Result;
use crate::graph::{Edge, WorkGraph, target};

/// Links every connected component to the component of the first vertex.
///
/// The root of each further component of a DFS forest gets reciprocal edges
/// to the first vertex. Returns the added edges.
pub fn make_connected(graph: &mut WorkGraph) -> Result<Vec<Edge>> {
    let mut added = vec![];
    let Some(u) = graph.first_node() else {
        return Ok(added);
    };

    let mut reached = FixedBitSet::with_capacity(graph.vertex_bound());
    let nodes = graph.nodes().to_vec();
    for v in nodes {
        if reached.contains(v) {
            continue;
        }
        explore(graph, v, &mut reached);
        if u != v {
            link(graph, u, v, &mut added)?;
        }
    }

    Ok(added)
}

/// Makes a bidirected graph biconnected without affecting its planarity.
///
/// Let `a` be an articulation point with neighbours `u` and `v` in different
/// biconnected components. Both components have embeddings with `{u, a}` and
/// `{v, a}` on the outer face, so the edge `{u, v}` can be added. Whenever the
/// DFS finishes a child `w` of `v` with `lowpt[w] == dfsnum[v]`, `w` is linked
/// to the first neighbour of `v`, or to the parent of `v` if `w` is that first
/// neighbour. Returns the added edges, both orientations of each.
pub fn make_biconnected(graph: &mut WorkGraph) -> Result<Vec<Edge>> {
    let mut added = make_connected(graph)?;
    let Some(root) = graph.first_node() else {
        return Ok(added);
    };

    struct Frame {
        v: usize,
        pos: usize,
        first: Option<usize>, // target of the first edge of v
    }

    let bound = graph.vertex_bound();
    let mut dfsnum = vec![usize::MAX; bound];
    let mut lowpt = vec![usize::MAX; bound];
    let mut parent = vec![None; bound];
    let mut time = 0;

    dfsnum[root] = time;
    lowpt[root] = time;
    time += 1;
    let mut stack = vec![Frame {
        v: root,
        pos: 0,
        first: graph.first_adj_edge(root).map(target),
    }];

    while let Some(frame) = stack.last_mut() {
        let v = frame.v;

        // adjacency may grow during the pass, so index it afresh every time
        if let Some(&e) = graph.adj_edges(v).get(frame.pos) {
            frame.pos += 1;
            let w = target(e);
            if dfsnum[w] == usize::MAX {
                // e is a tree edge
                parent[w] = Some(v);
                dfsnum[w] = time;
                lowpt[w] = time;
                time += 1;
                stack.push(Frame {
                    v: w,
                    pos: 0,
                    first: graph.first_adj_edge(w).map(target),
                });
            } else {
                lowpt[v] = lowpt[v].min(dfsnum[w]);
            }
            continue;
        }

        stack.pop();
        let Some(p) = parent[v] else {
            continue;
        };
        let first = stack.last().and_then(|f| f.first);

        if lowpt[v] == dfsnum[p] {
            // p is an articulation point
            if first == Some(v) {
                if let Some(pp) = parent[p] {
                    link(graph, v, pp, &mut added)?;
                }
            } else if let Some(u) = first {
                link(graph, u, v, &mut added)?;
            }
        }
        lowpt[p] = lowpt[p].min(lowpt[v]);
    }

    Ok(added)
}

fn explore(graph: &WorkGraph, v: usize, reached: &mut FixedBitSet) {
    reached.insert(v);
    let mut stack = vec![v];
    while let Some(v) = stack.pop() {
        for w in graph.adj_nodes(v) {
            if !reached.put(w) {
                stack.push(w);
            }
        }
    }
}

/// Adds both orientations of `{u, v}`, skipping the ones already present.
fn link(graph: &mut WorkGraph, u: usize, v: usize, added: &mut Vec<Edge>) -> Result<()> {
    for e in [(u, v), (v, u)] {
        if !graph.contains_edge(e) {
            added.push(graph.add_edge(e.0, e.1)?);
        }
    }
    Ok(())
}
