use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use radsort::sort_by_key;

use crate::error::{PlanarityError, Result};

/// A directed edge in the form (source, target).
///
/// The working graph is simple, so the pair itself identifies the edge.
pub type Edge = (usize, usize);

pub fn source(e: Edge) -> usize {
    e.0
}

pub fn target(e: Edge) -> usize {
    e.1
}

pub fn reversal(e: Edge) -> Edge {
    (e.1, e.0)
}

/// Directed simple graph with ordered adjacency lists.
///
/// Vertices are dense indices handed out by [`WorkGraph::add_vertex`]; removed
/// vertices leave a hole. Every adjacency list is the subsequence of the global
/// edge list with that source, so reordering the global list reorders all
/// adjacency lists consistently.
#[derive(Debug, Clone, Default)]
pub struct WorkGraph {
    alive: FixedBitSet,
    nodes: Vec<usize>,     // alive vertices in insertion order
    adj: Vec<Vec<Edge>>,   // outgoing edges of each vertex
    edges: Vec<Edge>,      // all edges, global order
    edge_set: HashSet<Edge>,
    generation: u64,       // bumped on every mutation
}

impl WorkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with vertices `0..n` and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex();
        }
        graph
    }

    pub fn add_vertex(&mut self) -> usize {
        let v = self.adj.len();
        self.adj.push(Vec::new());
        self.alive.grow(v + 1);
        self.alive.insert(v);
        self.nodes.push(v);
        self.generation += 1;
        v
    }

    /// Adds the edge `(v, w)`. Self-loops and multi-edges are rejected.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<Edge> {
        if !self.contains_vertex(v) {
            return Err(PlanarityError::NoSuchVertex(v));
        }
        if !self.contains_vertex(w) {
            return Err(PlanarityError::NoSuchVertex(w));
        }
        if v == w {
            return Err(PlanarityError::SelfLoop(v));
        }
        if !self.edge_set.insert((v, w)) {
            return Err(PlanarityError::DuplicateEdge(v, w));
        }
        self.edges.push((v, w));
        self.adj[v].push((v, w));
        self.generation += 1;
        Ok((v, w))
    }

    pub fn remove_edge(&mut self, e: Edge) -> Result<()> {
        self.remove_edges(&[e])
    }

    /// Removes all given edges in a single pass over the edge list.
    ///
    /// Fails without touching the graph if any of them is missing.
    pub fn remove_edges(&mut self, doomed: &[Edge]) -> Result<()> {
        if let Some(&(s, t)) = doomed.iter().find(|e| !self.edge_set.contains(*e)) {
            return Err(PlanarityError::NoSuchEdge(s, t));
        }
        if doomed.is_empty() {
            return Ok(());
        }

        let doomed: HashSet<Edge> = doomed.iter().copied().collect();
        self.edges.retain(|e| !doomed.contains(e));
        let mut touched = FixedBitSet::with_capacity(self.adj.len());
        for e in &doomed {
            self.edge_set.remove(e);
            touched.insert(source(*e));
        }
        for s in touched.ones() {
            self.adj[s].retain(|e| !doomed.contains(e));
        }
        self.generation += 1;
        Ok(())
    }

    /// Removes `v` together with all incident edges.
    pub fn remove_vertex(&mut self, v: usize) -> Result<()> {
        if !self.contains_vertex(v) {
            return Err(PlanarityError::NoSuchVertex(v));
        }
        let incident: Vec<Edge> = self
            .edges
            .iter()
            .copied()
            .filter(|&(s, t)| s == v || t == v)
            .collect();
        self.remove_edges(&incident)?;

        self.alive.set(v, false);
        self.nodes.retain(|&u| u != v);
        self.adj[v].clear();
        self.generation += 1;
        Ok(())
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.alive.contains(v)
    }

    pub fn contains_edge(&self, e: Edge) -> bool {
        self.edge_set.contains(&e)
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// One past the largest vertex index ever handed out; size for per-vertex tables.
    pub fn vertex_bound(&self) -> usize {
        self.adj.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn first_node(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    pub fn adj_edges(&self, v: usize) -> &[Edge] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn adj_nodes(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj_edges(v).iter().map(|&e| target(e))
    }

    pub fn first_adj_edge(&self, v: usize) -> Option<Edge> {
        self.adj_edges(v).first().copied()
    }

    /// Reorders the global edge list by `cost` and rebuilds every adjacency
    /// list from it.
    ///
    /// The sort is stable: edges of equal cost keep their current relative
    /// order, which makes the result a function of the graph alone.
    pub fn sort_edges<F: FnMut(Edge) -> usize>(&mut self, mut cost: F) {
        sort_by_key(&mut self.edges, |&e| cost(e));

        for list in self.adj.iter_mut() {
            list.clear();
        }
        for &e in &self.edges {
            self.adj[source(e)].push(e);
        }
        self.generation += 1;
    }
}
