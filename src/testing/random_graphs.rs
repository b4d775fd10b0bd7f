use hashbrown::HashSet;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::UnGraph;
use crate::testing::un_graph;

/// Random connected simple graph with `n` vertices and at most `m` edges.
///
/// A random tree is grown first, the remaining edges are drawn uniformly;
/// draws hitting an existing edge or a loop are dropped.
pub fn random_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut present = HashSet::new();
    let mut edges = vec![];

    for i in 1..n {
        let j = rng.random_range(0..i);
        present.insert((j, i));
        edges.push((j, i));
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let key = (s.min(t), s.max(t));
        if s != t && present.insert(key) {
            edges.push((s, t));
        }
    }

    un_graph(n, &edges)
}

/// Random maximal planar graph: every new vertex is stacked into a random
/// face of the current triangulation.
pub fn random_triangulation(n: usize, seed: usize) -> UnGraph {
    assert!(n >= 3);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut edges = vec![(0, 1), (1, 2), (2, 0)];
    let mut faces = vec![[0, 1, 2], [0, 2, 1]];

    for v in 3..n {
        let f = rng.random_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(f);
        edges.extend([(a, v), (b, v), (c, v)]);
        faces.extend([[a, b, v], [b, c, v], [c, a, v]]);
    }

    un_graph(n, &edges)
}

/// Random planar graph: a random triangulation with every edge kept with probability `p`.
pub fn random_planar_graph(n: usize, p: f64, seed: usize) -> UnGraph {
    let full = random_triangulation(n, seed);
    let mut rng = StdRng::seed_from_u64(!(seed as u64));
    let edges: Vec<_> = full
        .edge_indices()
        .filter_map(|e| full.edge_endpoints(e))
        .filter(|_| rng.random_bool(p))
        .map(|(u, v)| (u.index(), v.index()))
        .collect();
    un_graph(n, &edges)
}
