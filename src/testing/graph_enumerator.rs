use petgraph::visit::NodeIndexable;

use crate::{EdgeLabel, UnGraph};

/// Iterates over all simple graphs on `n` labelled vertices.
///
/// Bit `k` of the mask decides about the `k`-th pair `(i, j)`, `i < j`, in
/// lexicographic order.
pub struct GraphEnumerator {
    n: usize,
    mask: usize,
    last_mask: usize,
}

impl GraphEnumerator {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * n.saturating_sub(1) / 2),
        }
    }
}

impl Iterator for GraphEnumerator {
    type Item = UnGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = UnGraph::new_undirected();
        for i in 0..self.n {
            graph.add_node(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(graph.from_index(i), graph.from_index(j), EdgeLabel::Real);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(GraphEnumerator::new(0).count(), 1);
        assert_eq!(GraphEnumerator::new(1).count(), 1);
        assert_eq!(GraphEnumerator::new(4).count(), 64);
        assert_eq!(GraphEnumerator::new(4).last().unwrap().edge_count(), 6);
    }
}
