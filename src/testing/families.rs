use crate::UnGraph;
use crate::testing::un_graph;

pub fn complete(n: usize) -> UnGraph {
    let edges: Vec<_> = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))).collect();
    un_graph(n, &edges)
}

/// Parts are `0..a` and `a..a + b`.
pub fn complete_bipartite(a: usize, b: usize) -> UnGraph {
    let edges: Vec<_> = (0..a).flat_map(|i| (a..a + b).map(move |j| (i, j))).collect();
    un_graph(a + b, &edges)
}

pub fn path(n: usize) -> UnGraph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    un_graph(n, &edges)
}

pub fn cycle(n: usize) -> UnGraph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    un_graph(n, &edges)
}

pub fn star(leaves: usize) -> UnGraph {
    let edges: Vec<_> = (1..=leaves).map(|i| (0, i)).collect();
    un_graph(leaves + 1, &edges)
}

/// Hub `0` with rim `1..=rim`.
pub fn wheel(rim: usize) -> UnGraph {
    let mut edges = vec![];
    for i in 1..=rim {
        edges.push((0, i));
        edges.push((i, i % rim + 1));
    }
    un_graph(rim + 1, &edges)
}

/// The 3-dimensional hypercube.
pub fn cube() -> UnGraph {
    let mut edges = vec![];
    for v in 0..8usize {
        for bit in [1, 2, 4] {
            if v & bit == 0 {
                edges.push((v, v | bit));
            }
        }
    }
    un_graph(8, &edges)
}

pub fn grid(rows: usize, cols: usize) -> UnGraph {
    let mut edges = vec![];
    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                edges.push((r * cols + c, (r + 1) * cols + c));
            }
            if c + 1 < cols {
                edges.push((r * cols + c, r * cols + c + 1));
            }
        }
    }
    un_graph(rows * cols, &edges)
}

pub fn petersen() -> UnGraph {
    let mut edges = vec![];
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    un_graph(10, &edges)
}

/// Maximal planar graph: vertex `v` is stacked into the face `(v-3, v-2, v-1)`.
pub fn stacked_triangulation(n: usize) -> UnGraph {
    assert!(n >= 3);
    let mut edges = vec![(0, 1), (1, 2), (2, 0)];
    for v in 3..n {
        edges.extend([(v - 3, v), (v - 2, v), (v - 1, v)]);
    }
    un_graph(n, &edges)
}

/// Polygon `0..n` triangulated by a fan from `0`.
pub fn outerplanar(n: usize) -> UnGraph {
    let mut edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    edges.extend((2..n - 1).map(|i| (0, i)));
    un_graph(n, &edges)
}

/// Replaces every edge by a path of length `times + 1`.
pub fn subdivide(graph: &UnGraph, times: usize) -> UnGraph {
    let mut n = graph.node_count();
    let mut edges = vec![];
    for e in graph.edge_indices() {
        let Some((u, v)) = graph.edge_endpoints(e) else {
            continue;
        };
        let mut prev = u.index();
        for _ in 0..times {
            edges.push((prev, n));
            prev = n;
            n += 1;
        }
        edges.push((prev, v.index()));
    }
    un_graph(n, &edges)
}

/// Vertex-disjoint union, the vertices of `b` are shifted behind those of `a`.
pub fn disjoint_union(a: &UnGraph, b: &UnGraph) -> UnGraph {
    let shift = a.node_count();
    let mut edges = vec![];
    for (graph, offset) in [(a, 0), (b, shift)] {
        for e in graph.edge_indices() {
            if let Some((u, v)) = graph.edge_endpoints(e) {
                edges.push((u.index() + offset, v.index() + offset));
            }
        }
    }
    un_graph(shift + b.node_count(), &edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(complete(5).edge_count(), 10);
        assert_eq!(complete_bipartite(3, 3).edge_count(), 9);
        assert_eq!(wheel(5).edge_count(), 10);
        assert_eq!(cube().edge_count(), 12);
        assert_eq!(grid(3, 4).edge_count(), 17);
        assert_eq!(petersen().edge_count(), 15);
        assert_eq!(stacked_triangulation(10).edge_count(), 24);
        assert_eq!(outerplanar(6).edge_count(), 9);
        assert_eq!(subdivide(&complete(4), 2).node_count(), 16);
        assert_eq!(disjoint_union(&cycle(3), &path(4)).edge_count(), 6);
    }
}
