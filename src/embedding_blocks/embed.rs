use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::embedding_blocks::strongly_planar::follow_spine;
use crate::embedding_blocks::structures::Alpha;
use crate::error::{PlanarityError, Result};
use crate::graph::{Edge, WorkGraph, reversal, source, target};
use crate::palm_tree::PalmTree;
use crate::types::Side;

/// Embedding of a single segment `S(e0)`, one frame per pending recursive call.
///
/// `t` collects the darts of the current spine vertex, `al` and `ar` hold the
/// darts still waiting for their source on the left and right of the spine.
struct Frame {
    e0: Edge,
    x: usize,
    side: Side,
    back_edge: Edge,
    w: usize,
    pos: usize,
    t: VecDeque<Edge>,
    al: VecDeque<Edge>,
    ar: VecDeque<Edge>,
}

/// Numbering state shared by all frames.
struct Embedder<'a> {
    graph: &'a WorkGraph,
    palm_tree: &'a PalmTree,
    alpha: &'a Alpha,
    sort_num: HashMap<Edge, usize>,
    tree_edge_into: Vec<Option<Edge>>,
    cur_nr: usize,
}

impl<'a> Embedder<'a> {
    fn open(&mut self, e0: Edge, side: Side) -> Result<Frame> {
        self.tree_edge_into[target(e0)] = Some(e0);
        let spine = follow_spine(self.graph, self.palm_tree, target(e0))?;
        let (&back_edge, tree_path) = spine
            .split_last()
            .ok_or_else(|| PlanarityError::StaleTables(format!("segment {e0:?} has no spine")))?;
        for &e in tree_path {
            self.tree_edge_into[target(e)] = Some(e);
        }

        Ok(Frame {
            e0,
            x: source(e0),
            side,
            back_edge,
            w: source(back_edge),
            pos: 0,
            t: VecDeque::from([back_edge]),
            al: VecDeque::new(),
            ar: VecDeque::new(),
        })
    }

    fn number(&mut self, darts: impl IntoIterator<Item = Edge>) {
        for e in darts {
            self.sort_num.insert(e, self.cur_nr);
            self.cur_nr += 1;
        }
    }

    /// Splices the lists `(tp, ap)` of the subsegment starting with `e` into `frame`.
    fn splice(&self, frame: &mut Frame, e: Edge, mut tp: VecDeque<Edge>, mut ap: VecDeque<Edge>) {
        if self.alpha.get(&e) == Some(&frame.side) {
            // T = T' T, Al = Al A'
            tp.append(&mut frame.t);
            frame.t = tp;
            frame.al.append(&mut ap);
        } else {
            // T = T T', Ar = A' Ar
            frame.t.append(&mut tp);
            ap.append(&mut frame.ar);
            frame.ar = ap;
        }
    }

    /// Finishes spine vertex `w`: numbers its darts and moves the darts of
    /// its parent waiting in `al` and `ar` into `t`.
    fn finish_vertex(&mut self, frame: &mut Frame) -> Result<()> {
        let w = frame.w;
        let into = self.tree_edge_into[w]
            .ok_or_else(|| PlanarityError::StaleTables(format!("no tree edge into vertex {w}")))?;
        let p = self.palm_tree.parent_of(w)?;

        frame.t.push_back(reversal(into));
        let darts: Vec<Edge> = frame.t.drain(..).collect();
        self.number(darts);

        while frame.al.back().is_some_and(|&e| source(e) == p) {
            if let Some(e) = frame.al.pop_back() {
                frame.t.push_front(e);
            }
        }
        frame.t.push_back(into);
        while frame.ar.front().is_some_and(|&e| source(e) == p) {
            if let Some(e) = frame.ar.pop_front() {
                frame.t.push_back(e);
            }
        }

        frame.w = p;
        frame.pos = 0;
        Ok(())
    }
}

/// Computes the position of every dart in the rotation system of a planar graph.
///
/// Must run on the graph and tables that passed the strongly planar test from
/// `e0`, with `alpha` as that test left it. Returns a rank for every dart of
/// the bidirected biconnected graph; sorting its edges by rank groups them by
/// source in the cyclic order of a planar embedding.
pub(crate) fn embed(
    graph: &WorkGraph,
    palm_tree: &PalmTree,
    e0: Edge,
    alpha: &Alpha,
) -> Result<HashMap<Edge, usize>> {
    palm_tree.check_fresh(graph)?;

    let mut embedder = Embedder {
        graph,
        palm_tree,
        alpha,
        sort_num: HashMap::with_capacity(2 * graph.edge_count()),
        tree_edge_into: vec![None; graph.vertex_bound()],
        cur_nr: 0,
    };
    let mut stack = vec![embedder.open(e0, Side::Left)?];

    loop {
        let Some(mut frame) = stack.pop() else {
            return Err(PlanarityError::StaleTables("embedding lost its outermost segment".into()));
        };

        if frame.w != frame.x {
            let w = frame.w;
            if let Some(&e) = graph.adj_edges(w).get(frame.pos) {
                frame.pos += 1;
                if frame.pos == 1 {
                    stack.push(frame);
                    continue;
                }

                if palm_tree.dfsnum[w] < palm_tree.dfsnum[target(e)] {
                    let side = if alpha.get(&e) == Some(&frame.side) {
                        Side::Left
                    } else {
                        Side::Right
                    };
                    let child = embedder.open(e, side)?;
                    stack.push(frame);
                    stack.push(child);
                } else {
                    embedder.splice(&mut frame, e, VecDeque::from([e]), VecDeque::from([reversal(e)]));
                    stack.push(frame);
                }
                continue;
            }

            embedder.finish_vertex(&mut frame)?;
            stack.push(frame);
            continue;
        }

        // A = Ar (w0, wk) Al
        let mut a = frame.ar;
        a.push_back(reversal(frame.back_edge));
        a.append(&mut frame.al);

        match stack.last_mut() {
            Some(parent) => embedder.splice(parent, frame.e0, frame.t, a),
            None => {
                // the darts around the root
                embedder.number(frame.t.into_iter().chain(a));
                return Ok(embedder.sort_num);
            }
        }
    }
}
