//! Step-by-step search algorithms on a 4-connected wall grid.
//!
//! Every search is a [`Stepper`]: an explicit state object that processes one
//! frontier node per [`advance`](Stepper::advance) call and returns an
//! [`AlgorithmStep`] snapshot of the visited set and parent links at that
//! moment. The visualizer consumes these snapshots one at a time.
//!
//! - **BFS** ([`BfsStepper`]): FIFO queue, shortest path guaranteed.
//! - **DFS** ([`DfsStepper`]): LIFO stack, no optimality.
//! - **Greedy** ([`GreedyStepper`]): min-heap on distance to the end.
//! - **A\*** ([`AstarStepper`]): min-heap on `g + 1.5 * manhattan`.
//!
//! [`AlgorithmRunner`] wraps a stepper with an explicit lifecycle
//! (`Idle → Running → Found | Exhausted`) and reconstructs the final path.
//!
//! # Example
//!
//! ```
//! use pathviz_core::{Board, Point};
//! use pathviz_paths::{Algorithm, AlgorithmRunner, RunnerState};
//!
//! let board = Board::new(5, 5);
//! let mut runner = AlgorithmRunner::new(Algorithm::Bfs, &board, Point::new(0, 0), Point::new(4, 4));
//! runner.start();
//! while runner.next().is_some() {}
//! assert_eq!(runner.state(), RunnerState::Found);
//! assert_eq!(runner.path().map(|p| p.len()), Some(9));
//! ```

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod greedy;
mod neighbors;
mod runner;
mod step;

#[cfg(test)]
mod scenarios;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::{ASTAR_HEURISTIC_WEIGHT, AstarStepper, UNREACHABLE};
pub use bfs::BfsStepper;
pub use dfs::DfsStepper;
pub use distance::{Heuristic, euclidean, manhattan};
pub use greedy::GreedyStepper;
pub use neighbors::{Neighbors, is_end, is_visited};
pub use runner::{AlgorithmRunner, RunnerState};
pub use step::{AlgorithmStep, Stepper, Steps, reconstruct_path};
