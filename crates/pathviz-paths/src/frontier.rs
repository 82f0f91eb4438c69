//! Frontier containers shared by every traversal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Point;

use crate::algorithm::Discipline;

/// Heap entry ordered by `key`, then by insertion sequence.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) key: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest insertion among equal keys.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Discovered-but-unfinalized cells, handed out per the algorithm's
/// discipline.
///
/// The priority variant never updates entries in place: an improved cell is
/// pushed again and the caller skips stale pops.
#[derive(Debug)]
pub(crate) enum Frontier {
    Priority { heap: BinaryHeap<NodeRef>, seq: u64 },
    Queue(VecDeque<Point>),
    Stack(Vec<Point>),
}

impl Frontier {
    pub(crate) fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Priority => Frontier::Priority {
                heap: BinaryHeap::new(),
                seq: 0,
            },
            Discipline::Fifo => Frontier::Queue(VecDeque::new()),
            Discipline::Lifo => Frontier::Stack(Vec::new()),
        }
    }

    /// Add `pos`. `key` only matters for the priority discipline.
    pub(crate) fn push(&mut self, pos: Point, key: f64) {
        match self {
            Frontier::Priority { heap, seq } => {
                heap.push(NodeRef { pos, key, seq: *seq });
                *seq += 1;
            }
            Frontier::Queue(q) => q.push_back(pos),
            Frontier::Stack(s) => s.push(pos),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        match self {
            Frontier::Priority { heap, .. } => heap.pop().map(|n| n.pos),
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Priority { heap, .. } => heap.len(),
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
        }
    }
}
