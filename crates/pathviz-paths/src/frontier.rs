use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathviz_core::Point;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first, and among equal priorities the earliest insertion.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority frontier for best-first searches.
///
/// The same point may be queued several times; callers skip stale entries
/// when they pop them.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub(crate) fn push(&mut self, pos: Point, priority: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = PriorityFrontier::default();
        f.push(Point::new(0, 0), 3.0);
        f.push(Point::new(0, 1), 1.0);
        f.push(Point::new(0, 2), 2.5);
        assert_eq!(f.pop(), Some(Point::new(0, 1)));
        assert_eq!(f.pop(), Some(Point::new(0, 2)));
        assert_eq!(f.pop(), Some(Point::new(0, 0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = PriorityFrontier::default();
        for c in 0..5 {
            f.push(Point::new(0, c), 1.0);
        }
        assert_eq!(f.len(), 5);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|p| p.col).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
