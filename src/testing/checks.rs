use hashbrown::HashSet;
use petgraph::visit::EdgeRef;

use crate::embedding::PlanarEmbedding;
use crate::graph::{Edge, source};
use crate::{EdgeLabel, UnGraph};

fn find(parent: &mut [usize], mut v: usize) -> usize {
    while parent[v] != v {
        parent[v] = parent[parent[v]];
        v = parent[v];
    }
    v
}

/// Checks that `embedding` is a planar rotation system of `graph` (plus its augmentation).
///
/// The real darts are exactly both orientations of the input edges, every
/// dart has its reversal, the darts of each vertex are contiguous and the
/// traced faces satisfy `V - E + F = 2C` over the vertices with darts.
pub fn verify_embedding(graph: &UnGraph, embedding: &PlanarEmbedding) {
    let darts: HashSet<Edge> = embedding.darts().iter().copied().collect();
    assert_eq!(darts.len(), embedding.darts().len(), "duplicate darts");

    let expected: HashSet<Edge> = graph
        .edge_references()
        .flat_map(|e| {
            let (u, v) = (e.source().index(), e.target().index());
            [(u, v), (v, u)]
        })
        .collect();
    let real: HashSet<Edge> = darts
        .iter()
        .copied()
        .filter(|&e| embedding.label(e) == EdgeLabel::Real)
        .collect();
    assert_eq!(real, expected);

    for &(u, v) in embedding.darts() {
        assert!(darts.contains(&(v, u)), "dart ({u}, {v}) has no reversal");
    }

    let mut finished = HashSet::new();
    for pair in embedding.darts().windows(2) {
        let (a, b) = (source(pair[0]), source(pair[1]));
        if a != b {
            assert!(finished.insert(a));
            assert!(!finished.contains(&b), "rotation at {b} is split");
        }
    }

    let bound = embedding.darts().iter().map(|&(u, v)| u.max(v) + 1).max().unwrap_or(0);
    let mut parent: Vec<usize> = (0..bound).collect();
    let mut vertices = HashSet::new();
    for &(u, v) in embedding.darts() {
        vertices.insert(u);
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        parent[ru] = rv;
    }
    let components = vertices.iter().filter(|&&v| find(&mut parent, v) == v).count();

    let faces = embedding.faces();
    let face_darts: usize = faces.iter().map(|f| f.order.len()).sum();
    assert_eq!(face_darts, darts.len());

    let edges = darts.len() / 2;
    assert_eq!(
        vertices.len() + faces.len(),
        edges + 2 * components,
        "Euler's formula fails: V={} E={} F={} C={}",
        vertices.len(),
        edges,
        faces.len(),
        components
    );
}

/// Checks that `graph` is a subdivision of K5 or K3,3, up to isolated vertices.
pub fn assert_kuratowski_subdivision(graph: &UnGraph) {
    let n = graph.node_count();
    let mut adj: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    for e in graph.edge_references() {
        let (u, v) = (e.source().index(), e.target().index());
        assert_ne!(u, v);
        assert!(adj[u].insert(v), "multi-edge ({u}, {v})");
        adj[v].insert(u);
    }

    // smooth out subdivision vertices
    while let Some(v) = (0..n).find(|&v| adj[v].len() == 2) {
        let nb: Vec<usize> = adj[v].drain().collect();
        let (a, b) = (nb[0], nb[1]);
        adj[a].remove(&v);
        adj[b].remove(&v);
        assert!(adj[a].insert(b), "smoothing {v} creates a multi-edge");
        adj[b].insert(a);
    }

    let branch: Vec<usize> = (0..n).filter(|&v| !adj[v].is_empty()).collect();
    match branch.len() {
        5 => {
            for &v in &branch {
                assert_eq!(adj[v].len(), 4, "not a K5 subdivision");
            }
        }
        6 => {
            let mut color = vec![None; n];
            color[branch[0]] = Some(false);
            let mut stack = vec![branch[0]];
            while let Some(v) = stack.pop() {
                assert_eq!(adj[v].len(), 3, "not a K3,3 subdivision");
                for &w in &adj[v] {
                    match color[w] {
                        None => {
                            color[w] = color[v].map(|c| !c);
                            stack.push(w);
                        }
                        Some(c) => assert_ne!(Some(c), color[v], "not a K3,3 subdivision"),
                    }
                }
            }
            let left = branch.iter().filter(|&&v| color[v] == Some(false)).count();
            assert_eq!(left, 3);
        }
        k => panic!("{k} branch vertices, expected 5 or 6"),
    }
}
