use pathviz_core::{Board, Matrix, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::frontier::PriorityFrontier;
use crate::neighbors::{Neighbors, is_visited};
use crate::step::{AlgorithmStep, SearchState, Stepper};

/// Sentinel cost for cells not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Multiplier applied to the Manhattan estimate in A*.
///
/// Values above 1 make the heuristic inadmissible: the search leans harder
/// towards the end and the returned path is not guaranteed to be minimal.
pub const ASTAR_HEURISTIC_WEIGHT: f64 = 1.5;

/// A* search ordered by `f = g + 1.5 * manhattan(n, end)`.
///
/// `g` is the step count from the start, lowered whenever a strictly cheaper
/// route to an unprocessed node turns up; the node is then queued again and
/// stale entries are skipped on pop.
#[derive(Debug)]
pub struct AstarStepper {
    search: SearchState,
    cost: Matrix<i32>,
    frontier: PriorityFrontier,
    nbuf: Neighbors,
}

impl AstarStepper {
    pub fn new(board: Board, start: Point, end: Point) -> Self {
        let search = SearchState::new(board, start, end);
        let mut cost = Matrix::new(search.board.rows(), search.board.cols(), UNREACHABLE);
        let mut frontier = PriorityFrontier::default();
        if search.start_in_bounds() {
            cost.set(start, 0);
            frontier.push(start, estimate(start, end));
        }
        Self {
            search,
            cost,
            frontier,
            nbuf: Neighbors::new(),
        }
    }

    /// Best known cost from the start to `p`, [`UNREACHABLE`] if none yet.
    pub fn cost_at(&self, p: Point) -> i32 {
        self.cost.at(p).unwrap_or(UNREACHABLE)
    }
}

#[inline]
fn estimate(p: Point, end: Point) -> f64 {
    f64::from(manhattan(p, end)) * ASTAR_HEURISTIC_WEIGHT
}

impl Stepper for AstarStepper {
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
            let tentative = self.cost_at(current).saturating_add(1);
            for &n in self.nbuf.cardinal(&self.search.board, current) {
                if is_visited(&self.search.visited, n) {
                    continue;
                }
                let Some(g) = self.cost.get_mut(n) else {
                    continue;
                };
                if tentative >= *g {
                    continue;
                }
                *g = tentative;
                self.search.discover(n, current);
                self.frontier.push(n, f64::from(tentative) + estimate(n, end));
            }

            return Some(self.search.snapshot(current, false));
        }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn is_done(&self) -> bool {
        self.search.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_count_steps_from_start() {
        let board = Board::new(3, 3);
        let mut s = AstarStepper::new(board, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(s.cost_at(Point::new(0, 0)), 0);
        assert_eq!(s.cost_at(Point::new(1, 1)), UNREACHABLE);
        s.advance();
        assert_eq!(s.cost_at(Point::new(1, 0)), 1);
        assert_eq!(s.cost_at(Point::new(0, 1)), 1);
        while s.advance().is_some() {}
        assert_eq!(s.cost_at(Point::new(2, 2)), 4);
    }

    #[test]
    fn detours_around_a_wall() {
        let (board, start, end) = Board::parse(
            "
            .....
            S.#.E
            .....
            ",
        );
        let (start, end) = (start.unwrap(), end.unwrap());
        let last = AstarStepper::new(board, start, end).steps().last().unwrap();
        assert!(last.found);
        let path = last.path(start, end).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn weighted_heuristic_is_inadmissible() {
        // On an open board the estimate from the start exceeds the true
        // remaining distance.
        let (start, end) = (Point::new(0, 0), Point::new(0, 4));
        assert!(estimate(start, end) > f64::from(manhattan(start, end)));
    }
}
