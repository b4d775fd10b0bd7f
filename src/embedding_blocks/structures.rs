use std::collections::VecDeque;
use std::mem;

use hashbrown::HashMap;

use crate::{graph::Edge, types::Side};

/// Side assignment of segment edges, filled by the strongly planar test.
pub(crate) type Alpha = HashMap<Edge, Side>;

pub(crate) type BlockId = usize;

/// Connected component of the interlacing graph of the segments hanging off a spine.
///
/// Attachment lists hold DFS numbers, highest first. Segment lists hold the
/// edges that define the segments placed on each side.
#[derive(Debug, Clone, Default)]
pub(crate) struct Block {
    pub latt: VecDeque<usize>,
    pub ratt: VecDeque<usize>,
    pub lseg: Vec<Edge>,
    pub rseg: Vec<Edge>,
}

impl Block {
    /// Block with a single segment `e` on its left side.
    pub fn new(e: Edge, att: VecDeque<usize>) -> Self {
        Self {
            latt: att,
            ratt: VecDeque::new(),
            lseg: vec![e],
            rseg: Vec::new(),
        }
    }

    pub fn flip(&mut self) {
        mem::swap(&mut self.latt, &mut self.ratt);
        mem::swap(&mut self.lseg, &mut self.rseg);
    }

    /// Whether the lowest left attachment lies strictly below the highest left attachment of `top`.
    pub fn left_interlace(&self, top: &Block) -> bool {
        match (self.latt.back(), top.latt.front()) {
            (Some(low), Some(high)) => low < high,
            _ => false,
        }
    }

    pub fn right_interlace(&self, top: &Block) -> bool {
        match (self.latt.back(), top.ratt.front()) {
            (Some(low), Some(high)) => low < high,
            _ => false,
        }
    }

    /// Appends both sides of `other` to the rear of this block.
    pub fn combine(&mut self, mut other: Block) {
        self.latt.append(&mut other.latt);
        self.ratt.append(&mut other.ratt);
        self.lseg.append(&mut other.lseg);
        self.rseg.append(&mut other.rseg);
    }

    /// Removes all attachments equal to `dfsnum_w` from the fronts of both sides.
    ///
    /// Returns `true` when nothing is left; the placement of every segment is
    /// then recorded in `alpha`.
    pub fn clean(&mut self, dfsnum_w: usize, alpha: &mut Alpha) -> bool {
        while self.latt.front() == Some(&dfsnum_w) {
            self.latt.pop_front();
        }
        while self.ratt.front() == Some(&dfsnum_w) {
            self.ratt.pop_front();
        }
        if !self.latt.is_empty() || !self.ratt.is_empty() {
            return false;
        }

        self.record_sides(alpha);
        true
    }

    /// Whether both sides attach strictly above `dfsnum_w0`.
    pub fn attaches_twice_above(&self, dfsnum_w0: usize) -> bool {
        match (self.latt.front(), self.ratt.front()) {
            (Some(&l), Some(&r)) => l > dfsnum_w0 && r > dfsnum_w0,
            _ => false,
        }
    }

    /// Flips the block if its right side attaches above `dfsnum_w0`, then
    /// appends left and right attachments to `att`.
    ///
    /// At most one side attaches above `dfsnum_w0` when this is called, and the
    /// other side attaches only to `dfsnum_w0`, so `att` stays ordered.
    pub fn add_to_att(mut self, att: &mut VecDeque<usize>, dfsnum_w0: usize, alpha: &mut Alpha) {
        if self.ratt.front().is_some_and(|&r| r > dfsnum_w0) {
            self.flip();
        }
        att.append(&mut self.latt);
        att.append(&mut self.ratt);
        self.record_sides(alpha);
    }

    fn record_sides(&self, alpha: &mut Alpha) {
        for &e in &self.lseg {
            alpha.insert(e, Side::Left);
        }
        for &e in &self.rseg {
            alpha.insert(e, Side::Right);
        }
    }
}

/// Storage for all blocks created while testing one segment tree.
///
/// Stacks of blocks are plain `Vec<BlockId>`; a block leaves its stack by being
/// taken out of its slot, the slot itself lives until the arena is dropped.
#[derive(Debug, Default)]
pub(crate) struct BlockArena {
    slots: Vec<Block>,
}

impl BlockArena {
    pub fn alloc(&mut self, block: Block) -> BlockId {
        self.slots.push(block);
        self.slots.len() - 1
    }

    pub fn get(&self, id: BlockId) -> &Block {
        &self.slots[id]
    }

    pub fn get_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.slots[id]
    }

    pub fn take(&mut self, id: BlockId) -> Block {
        mem::take(&mut self.slots[id])
    }

    /// Adds the segment defined by `e` with attachments `att` on top of `stack`.
    ///
    /// The new block absorbs every block it interlaces with, flipping them as
    /// needed. Returns `false` if a block interlaces on both sides, i.e. the
    /// interlacing graph is not bipartite.
    pub fn push_segment(&mut self, stack: &mut Vec<BlockId>, e: Edge, att: VecDeque<usize>) -> bool {
        let mut block = Block::new(e, att);

        while let Some(&top) = stack.last() {
            if block.left_interlace(self.get(top)) {
                self.get_mut(top).flip();
            }
            if block.left_interlace(self.get(top)) {
                stack.clear();
                return false;
            }
            if !block.right_interlace(self.get(top)) {
                break;
            }
            stack.pop();
            let other = self.take(top);
            block.combine(other);
        }

        let id = self.alloc(block);
        stack.push(id);
        true
    }

    /// Removes `dfsnum_w` from the topmost blocks, popping every block left without attachments.
    pub fn clean(&mut self, stack: &mut Vec<BlockId>, dfsnum_w: usize, alpha: &mut Alpha) {
        while let Some(&top) = stack.last() {
            if !self.get_mut(top).clean(dfsnum_w, alpha) {
                break;
            }
            stack.pop();
            self.take(top);
        }
    }

    /// Empties `stack` into an ordered attachment list.
    ///
    /// Returns `None` if some block attaches above `dfsnum_w0` on both sides.
    pub fn drain_into_att(
        &mut self,
        stack: &mut Vec<BlockId>,
        dfsnum_w0: usize,
        alpha: &mut Alpha,
    ) -> Option<VecDeque<usize>> {
        let mut att = VecDeque::new();
        while let Some(top) = stack.pop() {
            let block = self.take(top);
            if block.attaches_twice_above(dfsnum_w0) {
                stack.clear();
                return None;
            }
            block.add_to_att(&mut att, dfsnum_w0, alpha);
        }
        Some(att)
    }
}
