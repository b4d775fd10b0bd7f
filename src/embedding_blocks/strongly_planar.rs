use std::collections::VecDeque;

use tracing::trace;

use crate::embedding_blocks::structures::{Alpha, BlockArena, BlockId};
use crate::error::{PlanarityError, Result};
use crate::graph::{Edge, WorkGraph, source, target};
use crate::palm_tree::PalmTree;

/// Follows first edges from `y` while they lead down the tree.
///
/// Returns the edges of the spine; the last one is the back edge `(wk, w0)`
/// closing the cycle.
pub(crate) fn follow_spine(graph: &WorkGraph, palm_tree: &PalmTree, y: usize) -> Result<Vec<Edge>> {
    let mut spine = vec![];
    let mut wk = y;
    loop {
        let e = graph
            .first_adj_edge(wk)
            .ok_or_else(|| PlanarityError::StaleTables(format!("vertex {wk} has no outgoing edge")))?;
        spine.push(e);
        if palm_tree.dfsnum[target(e)] > palm_tree.dfsnum[wk] {
            wk = target(e);
        } else {
            return Ok(spine);
        }
    }
}

/// Test of a single segment `S(e0)`, one frame per pending recursive call.
struct Frame {
    e0: Edge,
    x: usize,
    w0: usize,
    w: usize,   // current spine vertex, walks from wk up to x
    pos: usize, // next edge of w to look at
    blocks: Vec<BlockId>,
}

impl Frame {
    fn open(graph: &WorkGraph, palm_tree: &PalmTree, e0: Edge) -> Result<Self> {
        let spine = follow_spine(graph, palm_tree, target(e0))?;
        let back_edge = spine[spine.len() - 1];

        Ok(Self {
            e0,
            x: source(e0),
            w0: target(back_edge),
            w: source(back_edge),
            pos: 0,
            blocks: vec![],
        })
    }
}

/// Tests whether the segment `S(e0)` of the tree edge `e0 = (x, y)` is strongly planar.
///
/// On success returns the attachments of the segment below `x`, highest DFS
/// number first, and records the side of every subsegment in `alpha`.
/// Returns `Ok(None)` if the segment is not strongly planar.
///
/// Walks the spine from its deepest vertex `wk` back to `x`. Every edge leaving
/// the spine, except the spine edge itself, defines a subsegment: a back edge is
/// a segment with a single attachment, a tree edge is tested in a nested frame
/// first. Each subsegment is merged into the stack of interlacing blocks; the
/// test fails as soon as that interlacing graph stops being bipartite. Back at
/// `x`, at most one side of every block may attach above `w0`.
pub(crate) fn strongly_planar(
    graph: &WorkGraph,
    palm_tree: &PalmTree,
    e0: Edge,
    alpha: &mut Alpha,
) -> Result<Option<VecDeque<usize>>> {
    palm_tree.check_fresh(graph)?;

    let mut arena = BlockArena::default();
    let mut stack = vec![Frame::open(graph, palm_tree, e0)?];

    while let Some(frame) = stack.last_mut() {
        let w = frame.w;

        if w != frame.x {
            if let Some(&e) = graph.adj_edges(w).get(frame.pos) {
                frame.pos += 1;
                if frame.pos == 1 {
                    // spine edge
                    continue;
                }

                if palm_tree.dfsnum[w] < palm_tree.dfsnum[target(e)] {
                    let child = Frame::open(graph, palm_tree, e)?;
                    stack.push(child);
                } else {
                    let att = VecDeque::from([palm_tree.dfsnum[target(e)]]);
                    if !arena.push_segment(&mut frame.blocks, e, att) {
                        trace!(segment = ?frame.e0, edge = ?e, "interlacing graph is not bipartite");
                        return Ok(None);
                    }
                }
                continue;
            }

            // all edges of w are processed
            let p = palm_tree.parent_of(w)?;
            arena.clean(&mut frame.blocks, palm_tree.dfsnum[p], alpha);
            frame.w = p;
            frame.pos = 0;
            continue;
        }

        let dfsnum_w0 = palm_tree.dfsnum[frame.w0];
        let Some(mut att) = arena.drain_into_att(&mut frame.blocks, dfsnum_w0, alpha) else {
            trace!(segment = ?frame.e0, "segment is not strongly planar");
            return Ok(None);
        };
        if frame.w0 != frame.x {
            att.push_back(dfsnum_w0);
        }

        let e = frame.e0;
        stack.pop();
        let Some(parent) = stack.last_mut() else {
            return Ok(Some(att));
        };
        if !arena.push_segment(&mut parent.blocks, e, att) {
            trace!(segment = ?parent.e0, edge = ?e, "interlacing graph is not bipartite");
            return Ok(None);
        }
    }

    unreachable!("the outermost frame returns its attachments")
}
