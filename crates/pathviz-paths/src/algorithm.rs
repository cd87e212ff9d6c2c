use std::fmt;
use std::str::FromStr;

use pathviz_core::{Board, Point};

use crate::astar::AstarStepper;
use crate::bfs::BfsStepper;
use crate::dfs::DfsStepper;
use crate::greedy::GreedyStepper;
use crate::step::Stepper;

/// The search algorithms the visualizer can run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    /// Short identifier (`bfs`, `dfs`, `greedy`, `astar`).
    pub const fn id(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dfs => "Depth First Search",
            Algorithm::Greedy => "Greedy Search",
            Algorithm::AStar => "A* Search",
        }
    }

    /// One-paragraph explanation shown to learners.
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Bfs => {
                "Explores all neighbours at the current depth before moving to the next \
                 level. Guarantees the shortest path on an unweighted grid."
            }
            Algorithm::Dfs => {
                "Explores as far as possible along each branch before backtracking. \
                 Does not guarantee the shortest path."
            }
            Algorithm::Greedy => {
                "Always expands the node that looks closest to the goal, ignoring the \
                 distance already travelled. Often fast, but not guaranteed shortest."
            }
            Algorithm::AStar => {
                "Combines the cost so far with a weighted estimate of the remaining \
                 distance. The 1.5 weight trades optimality for speed."
            }
        }
    }

    /// The next algorithm in menu order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Create a fresh stepper running this algorithm on `board`.
    pub fn stepper(self, board: Board, start: Point, end: Point) -> Box<dyn Stepper> {
        match self {
            Algorithm::Bfs => Box::new(BfsStepper::new(board, start, end)),
            Algorithm::Dfs => Box::new(DfsStepper::new(board, start, end)),
            Algorithm::Greedy => Box::new(GreedyStepper::new(board, start, end)),
            Algorithm::AStar => Box::new(AstarStepper::new(board, start, end)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected bfs, dfs, greedy or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "greedy" | "best-first" => Ok(Algorithm::Greedy),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids_and_aliases() {
        for a in Algorithm::ALL {
            assert_eq!(a.id().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!(" A* ".parse::<Algorithm>(), Ok(Algorithm::AStar));
        let err = "dijkstra".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn next_cycles() {
        assert_eq!(Algorithm::Bfs.next(), Algorithm::Dfs);
        assert_eq!(Algorithm::AStar.next(), Algorithm::Bfs);
    }

    #[test]
    fn stepper_reports_its_algorithm() {
        for a in Algorithm::ALL {
            let s = a.stepper(Board::new(2, 2), Point::new(0, 0), Point::new(1, 1));
            assert_eq!(s.algorithm(), a);
            assert!(!s.is_done());
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn lowercase_names() {
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"astar\"");
        let a: Algorithm = serde_json::from_str("\"greedy\"").unwrap();
        assert_eq!(a, Algorithm::Greedy);
    }
}
