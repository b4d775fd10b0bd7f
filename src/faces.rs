use hashbrown::{HashMap, HashSet};

use crate::embedding::PlanarEmbedding;
use crate::graph::{Edge, reversal, source};

/// A face of an embedded graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Vertices in the order the boundary walk visits them.
    pub order: Vec<usize>,
}

/// Traces all faces of an embedding.
///
/// The face to the side of dart `(u, v)` continues with the successor of
/// `(v, u)` in the rotation at `v`. Every dart lies on exactly one face.
/// Darts whose reversal is missing are skipped.
pub fn get_faces(embedding: &PlanarEmbedding) -> Vec<Face> {
    let mut rotations: HashMap<usize, Vec<Edge>> = HashMap::new();
    let mut position: HashMap<Edge, usize> = HashMap::new();
    for &e in embedding.darts() {
        let rotation = rotations.entry(source(e)).or_default();
        position.insert(e, rotation.len());
        rotation.push(e);
    }

    let next = |e: Edge| -> Option<Edge> {
        let twin = reversal(e);
        let i = *position.get(&twin)?;
        let rotation = rotations.get(&source(twin))?;
        Some(rotation[(i + 1) % rotation.len()])
    };

    let mut used = HashSet::new();
    let mut faces = vec![];

    for &start in embedding.darts() {
        if used.contains(&start) || next(start).is_none() {
            continue;
        }

        let mut order = vec![];
        let mut e = start;
        loop {
            used.insert(e);
            order.push(source(e));
            match next(e) {
                Some(succ) if succ != start => e = succ,
                _ => break,
            }
        }
        faces.push(Face { order });
    }

    faces
}
