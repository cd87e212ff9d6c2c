//! The search grid: [`Cell`] classification and the [`Board`] holding it.

use std::fmt;

use crate::geom::Point;
use crate::matrix::Matrix;

/// Classification of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl Cell {
    /// ASCII representation used by [`Board::parse`] and `Display`.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Start and end markers are tracked by the caller as separate points; the
/// board itself only answers occupancy questions. Searches treat everything
/// except [`Cell::Wall`] as passable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Matrix<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Matrix::new(rows, cols, Cell::Empty),
        }
    }

    /// Build a board from a wall mask (`true` = wall).
    pub fn from_walls(walls: &Matrix<bool>) -> Self {
        let mut board = Self::new(walls.rows(), walls.cols());
        for (p, &w) in walls.iter() {
            if w {
                board.set(p, Cell::Wall);
            }
        }
        board
    }

    /// Parse an ASCII picture: `#` is a wall, `S` the start, `E` the end and
    /// anything else empty. Rows shorter than the first are padded with
    /// empty cells.
    ///
    /// Returns the board together with the start and end markers, if any.
    pub fn parse(text: &str) -> (Self, Option<Point>, Option<Point>) {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut board = Self::new(lines.len(), cols);
        let (mut start, mut end) = (None, None);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().take(cols).enumerate() {
                let p = Point::new(r as i32, c as i32);
                let cell = match ch {
                    '#' => Cell::Wall,
                    'S' => {
                        start = Some(p);
                        Cell::Start
                    }
                    'E' => {
                        end = Some(p);
                        Cell::End
                    }
                    _ => Cell::Empty,
                };
                board.set(p, cell);
            }
        }
        (board, start, end)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Whether `p` is on the board.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.cells.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.cells.at(p)
    }

    /// Whether `p` holds a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.cells.at(p) == Some(Cell::Wall)
    }

    /// Set the cell at `p`. No-op (returning `false`) when out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        self.cells.set(p, cell)
    }

    /// Flip `p` between wall and empty.
    pub fn toggle_wall(&mut self, p: Point) {
        match self.at(p) {
            Some(Cell::Wall) => {
                self.set(p, Cell::Empty);
            }
            Some(_) => {
                self.set(p, Cell::Wall);
            }
            None => {}
        }
    }

    /// Reset every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.count(|&c| c == Cell::Wall)
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().map(|(p, &c)| (p, c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let cell = self.at(Point::new(r as i32, c as i32)).unwrap_or_default();
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
