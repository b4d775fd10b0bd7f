use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::error::{PlanarityError, Result};
use crate::{EdgeLabel, UnGraph};

/// Reads a graph from a file.
///
/// Undirected graph input:
/// - one line, one edge in format "u,v",
/// - vertices are numbered from 0 up to the largest index mentioned,
/// - blank lines and lines starting with `#` are ignored.
///
/// Self-loops and multi-edges are read as given; the planarity test rejects them.
///
/// Example input:
/// ```text
/// # K4
/// 0,1
/// 0,2
/// 0,3
/// 1,2
/// 1,3
/// 2,3
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<UnGraph> {
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<UnGraph> {
    parse_edge_list(BufReader::new(Cursor::new(input)))
}

fn parse_edge_list<R: BufRead>(reader: R) -> Result<UnGraph> {
    let mut edges = Vec::new();
    let mut node_count = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_err = |message: String| PlanarityError::Parse { line: i + 1, message };
        let Some((u, v)) = line.split_once(',') else {
            return Err(parse_err(format!("expected 'u,v', found '{line}'")));
        };
        let u = vertex_index(u).map_err(parse_err)?;
        let v = vertex_index(v).map_err(parse_err)?;

        node_count = node_count.max(u + 1).max(v + 1);
        edges.push((u, v));
    }

    let mut graph = UnGraph::with_capacity(node_count, edges.len());
    let nodes: Vec<_> = (0..node_count).map(|i| graph.add_node(i as u32)).collect();
    graph.extend_with_edges(edges.iter().map(|&(u, v)| (nodes[u], nodes[v], EdgeLabel::Real)));

    Ok(graph)
}

/// Vertices carry their index as a `u32` weight, so larger indices are rejected.
fn vertex_index(token: &str) -> std::result::Result<usize, String> {
    let token = token.trim();
    match token.parse::<u32>() {
        Ok(i) if i < u32::MAX => Ok(i as usize),
        _ => Err(format!("'{token}' is not a vertex index")),
    }
}
