//! Wall-pattern generation.
//!
//! Every generator returns a `Matrix<bool>` wall mask (`true` = wall) of the
//! requested size. [`MazeGen::generate`] additionally carves a passage for
//! the pattern types that need one and clears the start and end cells.

use pathviz_core::{Board, Matrix, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::kind::MazeType;

/// Chance of each cell becoming a wall in [`MazeType::Random`].
pub const RANDOM_WALL_PROBABILITY: f64 = 0.3;

/// Chance of each extra sidestep being offered while carving a passage.
pub const CARVE_DETOUR_PROBABILITY: f64 = 0.5;

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a board of the given kind with `start` and `end` open.
    ///
    /// For kinds where [`MazeType::carves_path`] holds, a random passage
    /// from `start` to `end` is opened first so the board stays solvable.
    pub fn generate(
        &mut self,
        kind: MazeType,
        rows: usize,
        cols: usize,
        start: Point,
        end: Point,
    ) -> Board {
        let mut walls = self.walls(kind, rows, cols);
        if kind.carves_path() {
            self.carve_random_path(&mut walls, start, end);
        }
        walls.set(start, false);
        walls.set(end, false);
        log::debug!(
            "generated {} maze {}x{} with {} walls",
            kind.id(),
            rows,
            cols,
            walls.count(|&w| w)
        );
        Board::from_walls(&walls)
    }

    /// The raw wall mask for `kind`, before any passage carving.
    pub fn walls(&mut self, kind: MazeType, rows: usize, cols: usize) -> Matrix<bool> {
        if rows == 0 || cols == 0 {
            return Matrix::new(rows, cols, false);
        }
        match kind {
            MazeType::None => Matrix::new(rows, cols, false),
            MazeType::Random => self.random_walls(rows, cols),
            MazeType::VerticalLines => self.vertical_lines(rows, cols),
            MazeType::HorizontalLines => self.horizontal_lines(rows, cols),
            MazeType::ComboLines => self.combo_lines(rows, cols),
            MazeType::Spiral => spiral(rows, cols),
            MazeType::Checkerboard => checkerboard(rows, cols),
            MazeType::Diamonds => diamonds(rows, cols),
            MazeType::Caves => self.caves(rows, cols),
            MazeType::DfsMaze => self.dfs_maze(rows, cols),
        }
    }

    fn random_walls(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = Matrix::new(rows, cols, false);
        for p in walls.range().iter() {
            let w = self.rng.random_bool(RANDOM_WALL_PROBABILITY);
            walls.set(p, w);
        }
        walls
    }

    fn vertical_lines(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = Matrix::new(rows, cols, false);
        for c in (1..cols).step_by(2) {
            let gap = self.rng.random_range(0..rows);
            for r in (0..rows).filter(|&r| r != gap) {
                walls.set(Point::new(r as i32, c as i32), true);
            }
        }
        walls
    }

    fn horizontal_lines(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = Matrix::new(rows, cols, false);
        for r in (1..rows).step_by(2) {
            let gap = self.rng.random_range(0..cols);
            for c in (0..cols).filter(|&c| c != gap) {
                walls.set(Point::new(r as i32, c as i32), true);
            }
        }
        walls
    }

    fn combo_lines(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = self.vertical_lines(rows, cols);
        let horizontal = self.horizontal_lines(rows, cols);
        for (p, &w) in horizontal.iter() {
            if w {
                walls.set(p, true);
            }
        }
        walls
    }

    /// Random walk from the centre, opening every cell it steps on.
    fn caves(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = Matrix::new(rows, cols, true);
        let mut p = Point::new((rows / 2) as i32, (cols / 2) as i32);
        walls.set(p, false);
        for _ in 0..rows * cols * 2 {
            let next = p.neighbors_4()[self.rng.random_range(0..4)];
            if walls.contains(next) {
                p = next;
            }
            walls.set(p, false);
        }
        walls
    }

    /// Recursive backtracker over the odd-coordinate cells, run with an
    /// explicit stack. Cell (0, 1) is opened as an entrance.
    fn dfs_maze(&mut self, rows: usize, cols: usize) -> Matrix<bool> {
        let mut walls = Matrix::new(rows, cols, true);
        walls.set(Point::new(0, 1), false);

        let start = Point::new(self.odd_index(rows), self.odd_index(cols));
        walls.set(start, false);
        let mut stack = vec![start];
        let mut dirs = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        while let Some(&p) = stack.last() {
            dirs.shuffle(&mut self.rng);
            let next = dirs
                .iter()
                .map(|&(dr, dc)| (p.shift(dr, dc), p.shift(2 * dr, 2 * dc)))
                .find(|&(_, q)| walls.at(q) == Some(true));
            match next {
                Some((between, q)) => {
                    walls.set(between, false);
                    walls.set(q, false);
                    stack.push(q);
                }
                None => {
                    stack.pop();
                }
            }
        }
        walls
    }

    /// A random odd index below `n`, or 0 when there is none.
    fn odd_index(&mut self, n: usize) -> i32 {
        if n < 2 {
            return 0;
        }
        (self.rng.random_range(0..n / 2) * 2 + 1) as i32
    }

    /// Open a random, roughly monotone passage from `start` to `end`.
    ///
    /// Each move picks uniformly among the steps that get closer to `end`
    /// plus a random subset of sidesteps. After `rows * cols * 8` moves only
    /// closing steps are offered, so the walk always terminates.
    pub fn carve_random_path(&mut self, walls: &mut Matrix<bool>, start: Point, end: Point) {
        if !walls.contains(start) || !walls.contains(end) {
            log::debug!("not carving passage: {} or {} outside the board", start, end);
            return;
        }
        let limit = walls.rows() * walls.cols() * 8;
        let mut options = Vec::with_capacity(8);
        let mut p = start;
        let mut moves = 0;
        walls.set(p, false);
        while p != end {
            options.clear();
            if p.row < end.row {
                options.push(p.shift(1, 0));
            }
            if p.row > end.row {
                options.push(p.shift(-1, 0));
            }
            if p.col < end.col {
                options.push(p.shift(0, 1));
            }
            if p.col > end.col {
                options.push(p.shift(0, -1));
            }
            if moves < limit {
                for q in p.neighbors_4() {
                    if walls.contains(q) && self.rng.random_bool(CARVE_DETOUR_PROBABILITY) {
                        options.push(q);
                    }
                }
            }
            p = options[self.rng.random_range(0..options.len())];
            walls.set(p, false);
            moves += 1;
        }
        log::trace!("carved passage {} -> {} in {} moves", start, end, moves);
    }
}

/// A walled corridor spiralling inwards from the top-left corner, with one
/// wall cell between successive rings.
fn spiral(rows: usize, cols: usize) -> Matrix<bool> {
    let mut walls = Matrix::new(rows, cols, true);
    let mut open = |r: i32, c: i32| {
        walls.set(Point::new(r, c), false);
    };
    let (mut top, mut bottom) = (0i32, rows as i32 - 1);
    let (mut left, mut right) = (0i32, cols as i32 - 1);
    while top <= bottom && left <= right {
        for c in left..=right {
            open(top, c);
        }
        for r in top..=bottom {
            open(r, right);
        }
        if bottom > top {
            for c in left..=right {
                open(bottom, c);
            }
        }
        if right > left {
            for r in (top + 2)..=bottom {
                open(r, left);
            }
        }
        let (ntop, nbottom, nleft, nright) = (top + 2, bottom - 2, left + 2, right - 2);
        if ntop <= nbottom && nleft <= nright {
            open(ntop, left + 1);
        }
        (top, bottom, left, right) = (ntop, nbottom, nleft, nright);
    }
    walls
}

fn checkerboard(rows: usize, cols: usize) -> Matrix<bool> {
    let mut walls = Matrix::new(rows, cols, false);
    for p in walls.range().iter() {
        walls.set(p, (p.row + p.col) % 2 == 0);
    }
    walls
}

/// Diamond rings at odd Manhattan distances from the centre.
fn diamonds(rows: usize, cols: usize) -> Matrix<bool> {
    let mut walls = Matrix::new(rows, cols, false);
    let center = Point::new((rows / 2) as i32, (cols / 2) as i32);
    let max = center.row.min(center.col);
    for d in (1..=max).step_by(2) {
        for dr in -d..=d {
            let dc = d - dr.abs();
            walls.set(center.shift(dr, dc), true);
            walls.set(center.shift(dr, -dc), true);
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn mg(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    fn render(walls: &Matrix<bool>) -> String {
        let mut s = String::new();
        for r in 0..walls.rows() {
            for c in 0..walls.cols() {
                let w = walls.is_set(Point::new(r as i32, c as i32));
                s.push(if w { '#' } else { '.' });
            }
            s.push('\n');
        }
        s
    }

    fn reachable(board: &Board, from: Point, to: Point) -> bool {
        let mut seen = Matrix::new(board.rows(), board.cols(), false);
        let mut queue = VecDeque::from([from]);
        seen.set(from, true);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return true;
            }
            for q in p.neighbors_4() {
                if board.in_bounds(q) && !board.is_wall(q) && !seen.is_set(q) {
                    seen.set(q, true);
                    queue.push_back(q);
                }
            }
        }
        false
    }

    #[test]
    fn none_is_empty() {
        let walls = mg(1).walls(MazeType::None, 6, 8);
        assert_eq!(walls.count(|&w| w), 0);
        assert_eq!((walls.rows(), walls.cols()), (6, 8));
    }

    #[test]
    fn random_density_is_plausible() {
        let walls = mg(7).walls(MazeType::Random, 40, 40);
        let n = walls.count(|&w| w);
        assert!(n > 1600 / 5 && n < 1600 * 2 / 5, "{n} walls");
    }

    #[test]
    fn vertical_lines_leave_one_gap() {
        let walls = mg(3).walls(MazeType::VerticalLines, 7, 6);
        for c in 0..6 {
            let n = (0..7)
                .filter(|&r| walls.is_set(Point::new(r, c)))
                .count();
            assert_eq!(n, if c % 2 == 1 { 6 } else { 0 }, "column {c}");
        }
    }

    #[test]
    fn horizontal_lines_leave_one_gap() {
        let walls = mg(3).walls(MazeType::HorizontalLines, 6, 7);
        for r in 0..6 {
            let n = (0..7)
                .filter(|&c| walls.is_set(Point::new(r, c)))
                .count();
            assert_eq!(n, if r % 2 == 1 { 6 } else { 0 }, "row {r}");
        }
    }

    #[test]
    fn checkerboard_pattern() {
        let walls = mg(0).walls(MazeType::Checkerboard, 3, 4);
        assert_eq!(render(&walls), "#.#.\n.#.#\n#.#.\n");
    }

    #[test]
    fn spiral_pattern() {
        let walls = mg(0).walls(MazeType::Spiral, 7, 7);
        assert_eq!(
            render(&walls),
            "\
.......
######.
.....#.
.###.#.
.#...#.
.#####.
.......
"
        );
    }

    #[test]
    fn spiral_is_one_corridor() {
        let board = Board::from_walls(&mg(0).walls(MazeType::Spiral, 11, 15));
        // The innermost ring ends at (6, 4).
        assert!(reachable(&board, Point::new(0, 0), Point::new(6, 4)));
        assert!(board.is_wall(Point::new(5, 7)));
    }

    #[test]
    fn diamonds_ring_the_centre() {
        let walls = mg(0).walls(MazeType::Diamonds, 9, 9);
        let c = Point::new(4, 4);
        assert!(!walls.is_set(c));
        for q in c.neighbors_4() {
            assert!(walls.is_set(q));
        }
        // Distance 2 stays open, distance 3 is walled.
        assert!(!walls.is_set(c.shift(2, 0)));
        assert!(walls.is_set(c.shift(3, 0)));
        assert!(walls.is_set(c.shift(-1, 2)));
    }

    #[test]
    fn caves_open_the_centre() {
        let walls = mg(11).walls(MazeType::Caves, 15, 21);
        assert!(!walls.is_set(Point::new(7, 10)));
        assert!(walls.count(|&w| !w) > 1);
    }

    #[test]
    fn dfs_maze_is_perfect() {
        let walls = mg(5).walls(MazeType::DfsMaze, 9, 9);
        // 16 rooms joined by 15 passages, plus the entrance.
        assert_eq!(walls.count(|&w| !w), 32);
        assert!(!walls.is_set(Point::new(0, 1)));
        for r in (1..9).step_by(2) {
            for c in (1..9).step_by(2) {
                assert!(!walls.is_set(Point::new(r, c)));
            }
        }
        for r in (0..9).step_by(2) {
            for c in (0..9).step_by(2) {
                assert!(walls.is_set(Point::new(r, c)));
            }
        }
    }

    #[test]
    fn tiny_boards_do_not_panic() {
        for kind in MazeType::ALL {
            let mut g = mg(2);
            for (rows, cols) in [(0, 0), (1, 1), (1, 5), (5, 1), (2, 2)] {
                let walls = g.walls(kind, rows, cols);
                assert_eq!((walls.rows(), walls.cols()), (rows, cols));
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let (start, end) = (Point::new(0, 0), Point::new(14, 19));
        for kind in MazeType::ALL {
            let a = mg(42).generate(kind, 15, 20, start, end);
            let b = mg(42).generate(kind, 15, 20, start, end);
            assert_eq!(a, b, "{kind}");
        }
    }

    #[test]
    fn endpoints_are_always_open() {
        let (start, end) = (Point::new(0, 0), Point::new(10, 12));
        for kind in MazeType::ALL {
            let board = mg(9).generate(kind, 11, 13, start, end);
            assert!(!board.is_wall(start), "{kind}");
            assert!(!board.is_wall(end), "{kind}");
        }
    }

    #[test]
    fn carved_kinds_are_solvable() {
        let (start, end) = (Point::new(2, 1), Point::new(12, 17));
        for kind in MazeType::ALL.into_iter().filter(|k| k.carves_path()) {
            for seed in 0..8 {
                let board = mg(seed).generate(kind, 15, 20, start, end);
                assert!(reachable(&board, start, end), "{kind} seed {seed}");
            }
        }
    }

    #[test]
    fn carving_ignores_outside_endpoints() {
        let mut walls = Matrix::new(4, 4, true);
        mg(0).carve_random_path(&mut walls, Point::new(0, 0), Point::new(9, 9));
        assert_eq!(walls.count(|&w| w), 16);
    }
}
