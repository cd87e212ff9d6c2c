use pathviz_core::{Board, Point};

use crate::algorithm::Algorithm;
use crate::distance::Heuristic;
use crate::frontier::PriorityFrontier;
use crate::neighbors::{Neighbors, is_visited};
use crate::step::{AlgorithmStep, SearchState, Stepper};

/// Greedy best-first search: always expands the frontier node that looks
/// closest to the end, ignoring the cost already paid.
///
/// Nodes are marked visited when popped, so a node may sit in the frontier
/// several times; stale copies are skipped without producing a step.
#[derive(Debug)]
pub struct GreedyStepper {
    search: SearchState,
    frontier: PriorityFrontier,
    heuristic: Heuristic,
    nbuf: Neighbors,
}

impl GreedyStepper {
    /// Greedy search ordered by Manhattan distance to the end.
    pub fn new(board: Board, start: Point, end: Point) -> Self {
        Self::with_heuristic(board, start, end, Heuristic::Manhattan)
    }

    /// Greedy search ordered by the given distance estimate.
    pub fn with_heuristic(board: Board, start: Point, end: Point, heuristic: Heuristic) -> Self {
        let search = SearchState::new(board, start, end);
        let mut frontier = PriorityFrontier::default();
        if search.start_in_bounds() {
            frontier.push(start, heuristic.estimate(start, end));
        }
        Self {
            search,
            frontier,
            heuristic,
            nbuf: Neighbors::new(),
        }
    }

    /// The distance estimate ordering the frontier.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Stepper for GreedyStepper {
    fn advance(&mut self) -> Option<AlgorithmStep> {
        if self.search.done {
            return None;
        }
        loop {
            let Some(current) = self.frontier.pop() else {
                return self.search.exhaust();
            };
            if is_visited(&self.search.visited, current) {
                continue;
            }
            if let Some(last) = self.search.visit(current) {
                return Some(last);
            }

            let end = self.search.end;
            for &n in self.nbuf.cardinal(&self.search.board, current) {
                if is_visited(&self.search.visited, n) {
                    continue;
                }
                self.search.discover(n, current);
                self.frontier.push(n, self.heuristic.estimate(n, end));
            }

            return Some(self.search.snapshot(current, false));
        }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn is_done(&self) -> bool {
        self.search.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_straight_for_the_end() {
        let board = Board::new(5, 5);
        let steps: Vec<_> = GreedyStepper::new(board, Point::new(0, 0), Point::new(0, 4))
            .steps()
            .collect();
        let currents: Vec<_> = steps.iter().map(|s| s.current).collect();
        assert_eq!(
            currents,
            (0..5).map(|c| Point::new(0, c)).collect::<Vec<_>>()
        );
        assert!(steps.last().unwrap().found);
    }

    #[test]
    fn never_yields_a_node_twice() {
        let board = Board::new(4, 4);
        let steps: Vec<_> = GreedyStepper::new(board, Point::new(3, 0), Point::new(0, 3))
            .steps()
            .collect();
        let mut seen = std::collections::HashSet::new();
        for s in &steps {
            assert!(seen.insert(s.current), "{} yielded twice", s.current);
        }
    }

    #[test]
    fn euclidean_heuristic_also_reaches_end() {
        let (board, start, end) = Board::parse(
            "
            S...
            .##.
            ...E
            ",
        );
        let mut s =
            GreedyStepper::with_heuristic(board, start.unwrap(), end.unwrap(), Heuristic::Euclidean);
        assert_eq!(s.heuristic(), Heuristic::Euclidean);
        let last = std::iter::from_fn(|| s.advance()).last().unwrap();
        assert!(last.found);
        assert_eq!(last.current, end.unwrap());
    }
}
