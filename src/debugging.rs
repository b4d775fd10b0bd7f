use dot::{Edges, GraphWalk, Labeller, Nodes, Style};

use crate::embedding_blocks::structures::Alpha;
use crate::graph::WorkGraph;
use crate::palm_tree::PalmTree;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    position: usize, // position in the adjacency list of the source
    back: bool,
    side: Option<String>,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    labels: &'a [usize],
    palm_tree: &'a PalmTree,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Node) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Node) -> dot::LabelText<'a> {
        let palm = self.palm_tree;
        dot::LabelText::label(format!(
            "{}\nnum:{}\nl1:{} l2:{}\np:{}",
            self.labels.get(*n).copied().unwrap_or(*n),
            palm.dfsnum[*n],
            palm.lowpt1[*n],
            palm.lowpt2[*n],
            match palm.parent[*n] {
                Some(p) => self.labels.get(p).copied().unwrap_or(p).to_string(),
                None => "Root".to_string(),
            },
        ))
    }

    fn edge_label(&'a self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{} {}", e.position, e.side.as_deref().unwrap_or("")))
    }

    fn edge_style(&'a self, e: &Edge) -> Style {
        if e.back { Style::Dotted } else { Style::None }
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&'a self) -> Edges<'a, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&'a self, e: &Edge) -> Node {
        e.source
    }

    fn target(&'a self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders a preprocessed working graph in DOT format.
///
/// Nodes show their label from `labels` together with the DFS tables, edges
/// show their position in the adjacency list and their side if one was
/// assigned. Back edges are dotted.
pub(crate) fn draw(graph: &WorkGraph, palm_tree: &PalmTree, alpha: &Alpha, labels: &[usize]) -> String {
    let mut dot_graph = Graph {
        nodes: graph.nodes().to_vec(),
        edges: Vec::with_capacity(graph.edge_count()),
        labels,
        palm_tree,
    };

    for &v in graph.nodes() {
        for (i, &e) in graph.adj_edges(v).iter().enumerate() {
            dot_graph.edges.push(Edge {
                source: e.0,
                target: e.1,
                position: i,
                back: !palm_tree.is_tree_edge(e),
                side: alpha.get(&e).map(|s| s.to_string()),
            });
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&dot_graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
