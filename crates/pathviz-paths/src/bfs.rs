use std::collections::VecDeque;

use pathviz_core::{Board, Matrix, Point};

use crate::algorithm::Algorithm;
use crate::neighbors::Neighbors;
use crate::step::{AlgorithmStep, SearchState, Stepper};

/// Breadth-first search, one dequeued node per step.
///
/// Nodes are expanded in non-decreasing distance from the start, so the
/// reconstructed path is a shortest one. A node is marked discovered when it
/// is enqueued and is never enqueued twice.
#[derive(Debug)]
pub struct BfsStepper {
    search: SearchState,
    discovered: Matrix<bool>,
    queue: VecDeque<Point>,
    nbuf: Neighbors,
}

impl BfsStepper {
    pub fn new(board: Board, start: Point, end: Point) -> Self {
        let search = SearchState::new(board, start, end);
        let mut discovered = Matrix::new(search.board.rows(), search.board.cols(), false);
        let mut queue = VecDeque::new();
        if search.start_in_bounds() {
            discovered.set(start, true);
            queue.push_back(start);
        }
        Self {
            search,
            discovered,
            queue,
            nbuf: Neighbors::new(),
        }
    }
}

impl Stepper for BfsStepper {
    fn advance(&mut self) -> Option<AlgorithmStep> {
        if self.search.done {
            return None;
        }
        let Some(current) = self.queue.pop_front() else {
            return self.search.exhaust();
        };
        if let Some(last) = self.search.visit(current) {
            return Some(last);
        }

        for &n in self.nbuf.cardinal(&self.search.board, current) {
            if self.discovered.is_set(n) {
                continue;
            }
            self.discovered.set(n, true);
            self.search.discover(n, current);
            self.queue.push_back(n);
        }

        Some(self.search.snapshot(current, false))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn is_done(&self) -> bool {
        self.search.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_in_layer_order() {
        let board = Board::new(3, 3);
        let start = Point::new(1, 1);
        let currents: Vec<_> = BfsStepper::new(board, start, Point::new(0, 0))
            .steps()
            .map(|s| s.current)
            .collect();
        // Start, then up, down, left, right, then the first corner reached.
        assert_eq!(
            &currents[..5],
            &[
                start,
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
        assert_eq!(currents[5], Point::new(0, 0));
        assert_eq!(currents.len(), 6);
    }

    #[test]
    fn snapshot_taken_after_expansion() {
        let board = Board::new(1, 3);
        let mut s = BfsStepper::new(board, Point::new(0, 0), Point::new(0, 2));
        let first = s.advance().unwrap();
        assert_eq!(first.current, Point::new(0, 0));
        assert!(!first.found);
        assert_eq!(first.parent.at(Point::new(0, 1)), Some(Some(Point::new(0, 0))));
        // Discovered but not yet processed.
        assert!(!first.visited.is_set(Point::new(0, 1)));
    }

    #[test]
    fn exhausted_search_stays_done() {
        let (board, start, end) = Board::parse(
            "
            S#E
            ",
        );
        let mut s = BfsStepper::new(board, start.unwrap(), end.unwrap());
        assert!(s.advance().is_some());
        assert!(s.advance().is_none());
        assert!(s.is_done());
        assert!(s.advance().is_none());
    }

    #[test]
    fn out_of_bounds_start_yields_nothing() {
        let mut s = BfsStepper::new(Board::new(2, 2), Point::new(9, 9), Point::new(0, 0));
        assert!(s.advance().is_none());
        assert!(s.is_done());
    }
}
