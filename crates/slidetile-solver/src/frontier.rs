//! Open set of the search, ordered by estimated total cost.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::arena::NodeId;

/// A frontier entry with its priority cached at insertion time.
///
/// The derived ordering compares fields top to bottom, which gives the
/// priority order: lower `f`, then lower `h`, then earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierEntry {
    pub(crate) f: u32,
    pub(crate) h: u32,
    seq: u64,
    pub(crate) node: NodeId,
}

/// Min-priority queue of search nodes.
///
/// Entries for a board that was later reached more cheaply are left in place
/// and filtered out by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: NodeId, g: u32, h: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            f: g + h,
            h,
            seq,
            node,
        }));
    }

    pub(crate) fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
