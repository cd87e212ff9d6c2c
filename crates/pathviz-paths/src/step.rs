//! The uniform step protocol shared by every search: [`AlgorithmStep`]
//! snapshots produced by a [`Stepper`].

use pathviz_core::{Board, Matrix, Point};

use crate::algorithm::Algorithm;

/// One observable unit of search progress: the state right after a frontier
/// node has been processed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStep {
    /// The node popped from the frontier on this step.
    pub current: Point,
    /// Nodes processed so far, `current` included.
    pub visited: Matrix<bool>,
    /// Discovery links; `None` for the start and undiscovered cells.
    pub parent: Matrix<Option<Point>>,
    /// `true` only on the final step, when `current` is the end.
    pub found: bool,
}

impl AlgorithmStep {
    /// Reconstruct the path from `start` to `end` through this step's parent
    /// links.
    pub fn path(&self, start: Point, end: Point) -> Option<Vec<Point>> {
        reconstruct_path(&self.parent, start, end)
    }
}

/// Walk `parent` links back from `end` to `start` and return the path
/// start…end inclusive.
///
/// Returns `None` if the chain breaks or does not reach `start` within
/// `rows * cols` hops.
pub fn reconstruct_path(
    parent: &Matrix<Option<Point>>,
    start: Point,
    end: Point,
) -> Option<Vec<Point>> {
    if !parent.contains(end) {
        return None;
    }
    let limit = parent.rows() * parent.cols();
    let mut path = vec![end];
    let mut p = end;
    while p != start {
        p = parent.at(p).flatten()?;
        path.push(p);
        if path.len() > limit {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// A suspendable search over a fixed board.
///
/// Each call to [`advance`](Stepper::advance) processes exactly one frontier
/// node and returns a snapshot; `None` means the search is over, and every
/// later call returns `None` too.
pub trait Stepper {
    /// Process one frontier node.
    fn advance(&mut self) -> Option<AlgorithmStep>;

    /// Which algorithm this stepper runs.
    fn algorithm(&self) -> Algorithm;

    /// Whether the search has finished (found or exhausted).
    fn is_done(&self) -> bool;

    /// Adapt the stepper into an [`Iterator`] of steps.
    fn steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps(self)
    }
}

impl<S: Stepper + ?Sized> Stepper for Box<S> {
    fn advance(&mut self) -> Option<AlgorithmStep> {
        (**self).advance()
    }

    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

/// Iterator adapter returned by [`Stepper::steps`].
#[derive(Debug)]
pub struct Steps<S>(S);

impl<S: Stepper> Iterator for Steps<S> {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        self.0.advance()
    }
}

// ---------------------------------------------------------------------------
// Shared search state
// ---------------------------------------------------------------------------

/// Board, endpoints and the visited/parent matrices every stepper owns.
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) board: Board,
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) visited: Matrix<bool>,
    pub(crate) parent: Matrix<Option<Point>>,
    pub(crate) done: bool,
}

impl SearchState {
    pub(crate) fn new(board: Board, start: Point, end: Point) -> Self {
        let (rows, cols) = (board.rows(), board.cols());
        Self {
            board,
            start,
            end,
            visited: Matrix::new(rows, cols, false),
            parent: Matrix::new(rows, cols, None),
            done: false,
        }
    }

    /// Whether the start can seed the frontier at all.
    pub(crate) fn start_in_bounds(&self) -> bool {
        self.board.in_bounds(self.start)
    }

    /// Record `from` as the parent of `p` unless `p` already has one. The
    /// start never gets a parent.
    pub(crate) fn discover(&mut self, p: Point, from: Point) {
        if p == self.start {
            return;
        }
        if let Some(slot) = self.parent.get_mut(p) {
            if slot.is_none() {
                *slot = Some(from);
            }
        }
    }

    pub(crate) fn snapshot(&self, current: Point, found: bool) -> AlgorithmStep {
        AlgorithmStep {
            current,
            visited: self.visited.clone(),
            parent: self.parent.clone(),
            found,
        }
    }

    /// Mark `current` processed. When it is the end the search finishes and
    /// the final snapshot is returned.
    pub(crate) fn visit(&mut self, current: Point) -> Option<AlgorithmStep> {
        self.visited.set(current, true);
        if crate::neighbors::is_end(current, self.end) {
            self.done = true;
            log::trace!("end {} reached", current);
            return Some(self.snapshot(current, true));
        }
        None
    }

    /// Mark the search as exhausted.
    pub(crate) fn exhaust(&mut self) -> Option<AlgorithmStep> {
        if !self.done {
            log::trace!("frontier exhausted before reaching {}", self.end);
        }
        self.done = true;
        None
    }
}
