use pathviz_core::{Board, Matrix, Point};

use crate::algorithm::Algorithm;
use crate::neighbors::Neighbors;
use crate::step::{AlgorithmStep, SearchState, Stepper};

/// Depth-first search with an explicit stack, one popped node per step.
///
/// Neighbours are pushed up, down, left, right and therefore popped right
/// first. No shortest-path guarantee.
#[derive(Debug)]
pub struct DfsStepper {
    search: SearchState,
    discovered: Matrix<bool>,
    stack: Vec<Point>,
    nbuf: Neighbors,
}

impl DfsStepper {
    pub fn new(board: Board, start: Point, end: Point) -> Self {
        let search = SearchState::new(board, start, end);
        let mut discovered = Matrix::new(search.board.rows(), search.board.cols(), false);
        let mut stack = Vec::new();
        if search.start_in_bounds() {
            discovered.set(start, true);
            stack.push(start);
        }
        Self {
            search,
            discovered,
            stack,
            nbuf: Neighbors::new(),
        }
    }
}

impl Stepper for DfsStepper {
    fn advance(&mut self) -> Option<AlgorithmStep> {
        if self.search.done {
            return None;
        }
        let Some(current) = self.stack.pop() else {
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
            self.stack.push(n);
        }

        Some(self.search.snapshot(current, false))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn is_done(&self) -> bool {
        self.search.done
    }
}
