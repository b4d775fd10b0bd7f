use hashbrown::HashSet;
use petgraph::visit::{
    EdgeCount, EdgeRef, GraphProp, IntoEdgeReferences, IntoNodeIdentifiers, NodeCount, NodeIndexable,
};
use tracing::debug;

use crate::biconnect;
use crate::debugging::draw;
use crate::embedding_blocks::{embed::embed, strongly_planar::strongly_planar, structures::Alpha};
use crate::error::{PlanarityError, Result};
use crate::faces::{Face, get_faces};
use crate::graph::{Edge, WorkGraph, reversal, source, target};
use crate::palm_tree::{PalmTree, reorder};
use crate::types::{EdgeLabel, Side};

/// Options of [`planarity_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarityOptions {
    /// Reject graphs with more than `3n - 6` edges (`6n - 12` if directed) right away.
    pub euler_bound: bool,
    /// Leave the edges added for biconnectivity out of the returned embedding.
    pub restrict_to_input: bool,
}

impl Default for PlanarityOptions {
    fn default() -> Self {
        Self {
            euler_bound: true,
            restrict_to_input: false,
        }
    }
}

/// Outcome of a planarity test.
#[derive(Debug, Clone)]
pub enum Planarity {
    Planar(PlanarEmbedding),
    NonPlanar,
}

impl Planarity {
    pub fn is_planar(&self) -> bool {
        matches!(self, Planarity::Planar(_))
    }

    pub fn embedding(&self) -> Option<&PlanarEmbedding> {
        match self {
            Planarity::Planar(embedding) => Some(embedding),
            Planarity::NonPlanar => None,
        }
    }

    pub fn into_embedding(self) -> Option<PlanarEmbedding> {
        match self {
            Planarity::Planar(embedding) => Some(embedding),
            Planarity::NonPlanar => None,
        }
    }
}

/// A planar embedding given by its rotation system.
///
/// `darts` holds both orientations of every edge, grouped by source; within a
/// group the order is the cyclic order of the edges around the source.
/// Vertices are the `NodeIndexable` indices of the input graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarEmbedding {
    darts: Vec<Edge>,
    augmented: HashSet<Edge>,
}

impl PlanarEmbedding {
    pub fn darts(&self) -> &[Edge] {
        &self.darts
    }

    /// Neighbours of `v` in cyclic order.
    pub fn rotation(&self, v: usize) -> Vec<usize> {
        self.darts.iter().filter(|&&e| source(e) == v).map(|&e| target(e)).collect()
    }

    /// Rotation of every vertex with at least one dart, in order of appearance.
    pub fn rotation_system(&self) -> Vec<(usize, Vec<usize>)> {
        let mut system: Vec<(usize, Vec<usize>)> = vec![];
        for &(u, v) in &self.darts {
            match system.last_mut() {
                Some((w, rotation)) if *w == u => rotation.push(v),
                _ => system.push((u, vec![v])),
            }
        }
        system
    }

    /// `Virtual` for darts added to make the graph biconnected.
    pub fn label(&self, e: Edge) -> EdgeLabel {
        if self.augmented.contains(&e) {
            EdgeLabel::Virtual
        } else {
            EdgeLabel::Real
        }
    }

    /// The embedding of the input graph alone.
    ///
    /// Deleting edges from a planar rotation system keeps it planar.
    pub fn without_augmented(&self) -> Self {
        Self {
            darts: self
                .darts
                .iter()
                .copied()
                .filter(|e| !self.augmented.contains(e))
                .collect(),
            augmented: HashSet::new(),
        }
    }

    pub fn faces(&self) -> Vec<Face> {
        get_faces(self)
    }
}

/// State of one planarity test, exposed step by step.
///
/// The steps are [`make_biconnected`](Self::make_biconnected),
/// [`preprocess`](Self::preprocess), [`test`](Self::test) and
/// [`embed`](Self::embed); calling a step before its prerequisites fails.
#[derive(Debug, Clone)]
pub struct PlanarityContext {
    vertices: Vec<usize>, // working vertex -> caller index
    input_edges: usize,
    directed: bool,
    graph: WorkGraph,
    biconnected: Option<WorkGraph>,
    augmented: HashSet<Edge>,
    palm_tree: Option<PalmTree>,
    alpha: Alpha,
    planar: Option<bool>,
}

impl PlanarityContext {
    /// Copies `graph` into a bidirected working graph.
    ///
    /// Self-loops and repeated edges are rejected, errors name the vertices by
    /// their caller indices. In a directed graph `(u, v)` and `(v, u)` are one
    /// undirected edge.
    pub fn new<G>(graph: G) -> Result<Self>
    where
        G: IntoNodeIdentifiers + IntoEdgeReferences + NodeIndexable + NodeCount + EdgeCount + GraphProp,
    {
        let directed = graph.is_directed();
        let mut work = WorkGraph::new();
        let mut vertices = Vec::with_capacity(graph.node_count());
        let mut internal = vec![usize::MAX; graph.node_bound()];

        for v in graph.node_identifiers() {
            let i = graph.to_index(v);
            internal[i] = work.add_vertex();
            vertices.push(i);
        }

        for e in graph.edge_references() {
            let (s, t) = (graph.to_index(e.source()), graph.to_index(e.target()));
            if s == t {
                return Err(PlanarityError::SelfLoop(s));
            }
            let edge = (internal[s], internal[t]);
            if work.contains_edge(edge) || (!directed && work.contains_edge(reversal(edge))) {
                return Err(PlanarityError::DuplicateEdge(s, t));
            }
            work.add_edge(edge.0, edge.1)?;
        }

        bidirect(&mut work)?;
        debug!(
            vertices = work.node_count(),
            darts = work.edge_count(),
            directed,
            "copied input graph"
        );

        Ok(Self {
            vertices,
            input_edges: graph.edge_count(),
            directed,
            graph: work,
            biconnected: None,
            augmented: HashSet::new(),
            palm_tree: None,
            alpha: Alpha::new(),
            planar: None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges of the input graph.
    pub fn input_edge_count(&self) -> usize {
        self.input_edges
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The working graph in its current state.
    pub fn graph(&self) -> &WorkGraph {
        &self.graph
    }

    pub fn palm_tree(&self) -> Option<&PalmTree> {
        self.palm_tree.as_ref()
    }

    /// Adds edges until the working graph is biconnected and keeps a snapshot
    /// of the result for the embedding. Returns the number of added darts;
    /// once the snapshot exists nothing is added.
    pub fn make_biconnected(&mut self) -> Result<usize> {
        if self.biconnected.is_some() {
            return Ok(0);
        }
        let added = biconnect::make_biconnected(&mut self.graph)?;
        let count = added.len();
        self.augmented.extend(added);
        self.biconnected = Some(self.graph.clone());
        self.palm_tree = None;
        self.planar = None;
        self.alpha.clear();

        debug!(added = count / 2, "made graph biconnected");
        Ok(count)
    }

    /// Computes the palm tree and reorders the working graph, making it
    /// biconnected first if that has not happened yet.
    pub fn preprocess(&mut self) -> Result<&PalmTree> {
        if self.biconnected.is_none() {
            self.make_biconnected()?;
        }

        let palm_tree = reorder(&mut self.graph)?;
        self.planar = None;
        self.alpha.clear();
        debug!(edges = self.graph.edge_count(), "computed palm tree");

        Ok(&*self.palm_tree.insert(palm_tree))
    }

    /// Runs the strongly planar test on the segment of the first edge of the root.
    pub fn test(&mut self) -> Result<bool> {
        let palm_tree = self.palm_tree.as_ref().ok_or(PlanarityError::NotPreprocessed)?;
        palm_tree.check_fresh(&self.graph)?;
        self.alpha.clear();

        let planar = if self.graph.node_count() < 3 {
            true
        } else {
            let e0 = root_edge(&self.graph)?;
            self.alpha.insert(e0, Side::Left);
            strongly_planar(&self.graph, palm_tree, e0, &mut self.alpha)?.is_some()
        };

        debug!(planar, "planarity test finished");
        self.planar = Some(planar);
        Ok(planar)
    }

    /// Constructs the embedding after a successful [`test`](Self::test).
    pub fn embed(&self) -> Result<PlanarEmbedding> {
        if self.planar != Some(true) {
            return Err(PlanarityError::NotTested);
        }
        let palm_tree = self.palm_tree.as_ref().ok_or(PlanarityError::NotPreprocessed)?;
        let snapshot = self.biconnected.as_ref().ok_or(PlanarityError::NotPreprocessed)?;

        let mut ordered = snapshot.clone();
        if self.graph.node_count() >= 3 {
            let e0 = root_edge(&self.graph)?;
            let sort_num = embed(&self.graph, palm_tree, e0, &self.alpha)?;

            let unranked = ordered.edges().iter().filter(|e| !sort_num.contains_key(*e)).count();
            if unranked > 0 {
                return Err(PlanarityError::StaleTables(format!(
                    "{unranked} darts are missing from the embedding"
                )));
            }
            ordered.sort_edges(|e| sort_num[&e]);
        }

        let caller = |(u, v): Edge| (self.vertices[u], self.vertices[v]);
        Ok(PlanarEmbedding {
            darts: ordered.edges().iter().map(|&e| caller(e)).collect(),
            augmented: self.augmented.iter().map(|&e| caller(e)).collect(),
        })
    }

    /// DOT rendering of the preprocessed working graph, `None` before [`preprocess`](Self::preprocess).
    pub fn to_dot(&self) -> Option<String> {
        let palm_tree = self.palm_tree.as_ref()?;
        Some(draw(&self.graph, palm_tree, &self.alpha, &self.vertices))
    }
}

fn root_edge(graph: &WorkGraph) -> Result<Edge> {
    graph
        .first_node()
        .and_then(|root| graph.first_adj_edge(root))
        .ok_or(PlanarityError::NotPreprocessed)
}

/// Adds the missing reversal of every edge.
///
/// Sorting by the unordered pair puts an edge next to its reversal.
fn bidirect(graph: &mut WorkGraph) -> Result<()> {
    let n = graph.vertex_bound();
    graph.sort_edges(|(v, w)| n * v.min(w) + v.max(w));

    let edges = graph.edges().to_vec();
    let mut i = 0;
    while i < edges.len() {
        let e = edges[i];
        if edges.get(i + 1) == Some(&reversal(e)) {
            i += 2;
        } else {
            graph.add_edge(target(e), source(e))?;
            i += 1;
        }
    }
    Ok(())
}

/// Implements the Hopcroft-Tarjan planarity test.
///
/// Returns [`Planarity::NonPlanar`], or a planar embedding of the graph made
/// biconnected (of the graph alone with [`PlanarityOptions::restrict_to_input`]).
/// Fails on self-loops and repeated edges.
///
/// Reference:
/// K. Mehlhorn, P. Mutzel, *On the Embedding Phase of the Hopcroft and Tarjan Planarity Testing Algorithm*, Algorithmica 16 (1996)
pub fn planarity_test<G>(graph: G, options: &PlanarityOptions) -> Result<Planarity>
where
    G: IntoNodeIdentifiers + IntoEdgeReferences + NodeIndexable + NodeCount + EdgeCount + GraphProp,
{
    let mut context = PlanarityContext::new(graph)?;
    let n = context.vertex_count();
    let m = context.input_edge_count();

    if n < 3 {
        context.preprocess()?;
        context.test()?;
        return Ok(Planarity::Planar(context.embed()?.without_augmented()));
    }

    if options.euler_bound {
        let bound = if context.is_directed() { 6 * n - 12 } else { 3 * n - 6 };
        if m > bound {
            debug!(n, m, bound, "rejected by Euler's bound");
            return Ok(Planarity::NonPlanar);
        }
    }

    context.make_biconnected()?;
    context.preprocess()?;
    if !context.test()? {
        return Ok(Planarity::NonPlanar);
    }

    let embedding = context.embed()?;
    Ok(Planarity::Planar(if options.restrict_to_input {
        embedding.without_augmented()
    } else {
        embedding
    }))
}

/// Shorthand for [`planarity_test`] with default options.
pub fn is_planar<G>(graph: G) -> Result<bool>
where
    G: IntoNodeIdentifiers + IntoEdgeReferences + NodeIndexable + NodeCount + EdgeCount + GraphProp,
{
    Ok(planarity_test(graph, &PlanarityOptions::default())?.is_planar())
}
