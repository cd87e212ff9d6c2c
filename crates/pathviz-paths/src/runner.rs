//! [`AlgorithmRunner`] owns one suspended search and the path derived from
//! it.

use pathviz_core::{Board, Point};

use crate::algorithm::Algorithm;
use crate::step::{AlgorithmStep, Stepper, reconstruct_path};

/// Lifecycle of an [`AlgorithmRunner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunnerState {
    /// No search in progress.
    Idle,
    /// A search is suspended between steps.
    Running,
    /// The end was reached; a path is available.
    Found,
    /// The frontier ran dry without reaching the end.
    Exhausted,
}

impl RunnerState {
    /// Whether the runner has reached `Found` or `Exhausted`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunnerState::Found | RunnerState::Exhausted)
    }
}

/// Drives one search over a fixed (board, start, end, algorithm) tuple.
///
/// The board is copied at construction and stays read-only for the whole
/// run. Use a new runner for a different board or different endpoints.
pub struct AlgorithmRunner {
    algorithm: Algorithm,
    board: Board,
    start: Point,
    end: Point,
    stepper: Option<Box<dyn Stepper>>,
    last_step: Option<AlgorithmStep>,
    path: Option<Vec<Point>>,
    state: RunnerState,
    steps: usize,
}

impl std::fmt::Debug for AlgorithmRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRunner")
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("state", &self.state)
            .field("steps", &self.steps)
            .finish()
    }
}

impl AlgorithmRunner {
    /// Bind a runner to its inputs. Nothing is computed until
    /// [`start`](Self::start).
    pub fn new(algorithm: Algorithm, board: &Board, start: Point, end: Point) -> Self {
        Self {
            algorithm,
            board: board.clone(),
            start,
            end,
            stepper: None,
            last_step: None,
            path: None,
            state: RunnerState::Idle,
            steps: 0,
        }
    }

    /// Begin (or restart) the search and return its first step.
    ///
    /// Returns `None` when the search produces no step at all, e.g. for a
    /// start outside the board; the runner is then `Exhausted`.
    pub fn start(&mut self) -> Option<&AlgorithmStep> {
        log::debug!(
            "{} search from {} to {} on {}x{} board",
            self.algorithm.id(),
            self.start,
            self.end,
            self.board.rows(),
            self.board.cols()
        );
        self.clear();
        self.stepper = Some(self.algorithm.stepper(self.board.clone(), self.start, self.end));
        self.state = RunnerState::Running;
        self.pull()
    }

    /// Pull the next step. A no-op returning `None` unless `Running`.
    pub fn next(&mut self) -> Option<&AlgorithmStep> {
        if self.state != RunnerState::Running {
            return None;
        }
        self.pull()
    }

    /// Discard the suspended search and return to `Idle`.
    pub fn reset(&mut self) {
        if self.state != RunnerState::Idle {
            log::debug!("{} search reset after {} steps", self.algorithm.id(), self.steps);
        }
        self.clear();
    }

    /// The path from start to end inclusive; only available once `Found`.
    pub fn path(&self) -> Option<&[Point]> {
        match self.state {
            RunnerState::Found => self.path.as_deref(),
            _ => None,
        }
    }

    /// The most recent step, if any.
    pub fn current_step(&self) -> Option<&AlgorithmStep> {
        self.last_step.as_ref()
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start_point(&self) -> Point {
        self.start
    }

    pub fn end_point(&self) -> Point {
        self.end
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of steps produced since the last `start`.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    fn clear(&mut self) {
        self.stepper = None;
        self.last_step = None;
        self.path = None;
        self.steps = 0;
        self.state = RunnerState::Idle;
    }

    fn pull(&mut self) -> Option<&AlgorithmStep> {
        let step = self.stepper.as_mut().and_then(|s| s.advance());
        let Some(step) = step else {
            log::debug!(
                "{} search exhausted after {} steps: no path to {}",
                self.algorithm.id(),
                self.steps,
                self.end
            );
            self.state = RunnerState::Exhausted;
            self.stepper = None;
            return None;
        };

        self.steps += 1;
        log::trace!("step {}: current {}", self.steps, step.current);
        if step.found {
            self.path = reconstruct_path(&step.parent, self.start, self.end);
            log::debug!(
                "{} search found {} after {} steps (path length {})",
                self.algorithm.id(),
                self.end,
                self.steps,
                self.path.as_ref().map_or(0, Vec::len)
            );
            self.state = RunnerState::Found;
            self.stepper = None;
        }
        self.last_step = Some(step);
        self.last_step.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> (Board, Point, Point) {
        let (board, start, end) = Board::parse(
            "
            S..E
            ",
        );
        (board, start.unwrap(), end.unwrap())
    }

    #[test]
    fn lifecycle_to_found() {
        let (board, start, end) = corridor();
        let mut r = AlgorithmRunner::new(Algorithm::Bfs, &board, start, end);
        assert_eq!(r.state(), RunnerState::Idle);
        assert!(r.next().is_none());

        assert_eq!(r.start().map(|s| s.current), Some(start));
        assert_eq!(r.state(), RunnerState::Running);
        assert!(r.path().is_none());

        while r.next().is_some() {}
        assert_eq!(r.state(), RunnerState::Found);
        assert_eq!(r.step_count(), 4);
        assert!(r.current_step().unwrap().found);
        assert_eq!(r.path().unwrap().len(), 4);

        // Terminal: further pulls are no-ops.
        assert!(r.next().is_none());
        assert_eq!(r.state(), RunnerState::Found);
    }

    #[test]
    fn lifecycle_to_exhausted() {
        let (board, start, end) = Board::parse(
            "
            S#E
            ",
        );
        let mut r = AlgorithmRunner::new(Algorithm::AStar, &board, start.unwrap(), end.unwrap());
        assert!(r.start().is_some());
        assert!(r.next().is_none());
        assert_eq!(r.state(), RunnerState::Exhausted);
        assert!(r.state().is_terminal());
        assert!(r.path().is_none());
        // The last seen step is kept for display.
        assert!(r.current_step().is_some());
    }

    #[test]
    fn reset_discards_everything() {
        let (board, start, end) = corridor();
        let mut r = AlgorithmRunner::new(Algorithm::Dfs, &board, start, end);
        r.start();
        r.next();
        r.reset();
        assert_eq!(r.state(), RunnerState::Idle);
        assert!(r.current_step().is_none());
        assert_eq!(r.step_count(), 0);
        assert!(r.next().is_none());
    }

    #[test]
    fn restart_replays_from_scratch() {
        let (board, start, end) = corridor();
        let mut r = AlgorithmRunner::new(Algorithm::Greedy, &board, start, end);
        r.start();
        r.next();
        r.next();
        assert_eq!(r.start().map(|s| s.current), Some(start));
        assert_eq!(r.step_count(), 1);
    }

    #[test]
    fn start_on_end_is_found_immediately() {
        let board = Board::new(3, 3);
        let p = Point::new(1, 1);
        for a in Algorithm::ALL {
            let mut r = AlgorithmRunner::new(a, &board, p, p);
            let first = r.start().cloned().unwrap();
            assert!(first.found);
            assert_eq!(r.state(), RunnerState::Found);
            assert_eq!(r.path(), Some(&[p][..]));
        }
    }

    #[test]
    fn start_outside_board_exhausts() {
        let board = Board::new(3, 3);
        let mut r = AlgorithmRunner::new(Algorithm::Bfs, &board, Point::new(7, 7), Point::new(0, 0));
        assert!(r.start().is_none());
        assert_eq!(r.state(), RunnerState::Exhausted);
    }

    #[test]
    fn start_on_wall_still_searches() {
        let (board, _, end) = Board::parse(
            "
            #..
            ..E
            ",
        );
        let start = Point::new(0, 0);
        assert!(board.is_wall(start));
        for a in Algorithm::ALL {
            let mut r = AlgorithmRunner::new(a, &board, start, end.unwrap());
            r.start();
            while r.next().is_some() {}
            assert_eq!(r.state(), RunnerState::Found, "{a}");
            assert_eq!(r.path().unwrap()[0], start);
        }
    }

    #[test]
    fn end_on_wall_is_unreachable() {
        let (board, start, _) = Board::parse(
            "
            S..
            ..#
            ",
        );
        let mut r = AlgorithmRunner::new(Algorithm::Bfs, &board, start.unwrap(), Point::new(1, 2));
        r.start();
        while r.next().is_some() {}
        assert_eq!(r.state(), RunnerState::Exhausted);
    }

    #[test]
    fn board_is_copied() {
        let (mut board, start, end) = corridor();
        let r = AlgorithmRunner::new(Algorithm::Bfs, &board, start, end);
        board.toggle_wall(Point::new(0, 1));
        assert!(!r.board().is_wall(Point::new(0, 1)));
        assert_eq!(r.start_point(), start);
        assert_eq!(r.end_point(), end);
        assert_eq!(r.algorithm(), Algorithm::Bfs);
    }
}
