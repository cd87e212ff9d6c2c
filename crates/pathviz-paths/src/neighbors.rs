use pathviz_core::{Board, Matrix, Point};

/// Whether `p` has been processed according to `visited`.
#[inline]
pub fn is_visited(visited: &Matrix<bool>, p: Point) -> bool {
    visited.is_set(p)
}

/// Whether `p` is the search target.
#[inline]
pub fn is_end(p: Point, end: Point) -> bool {
    p == end
}

/// Cached neighbour computation helper.
///
/// Enumerates the passable cardinal neighbours of a point in the fixed
/// up, down, left, right order, reusing one buffer across calls.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-bounds, non-wall neighbours of `p` on `board`.
    pub fn cardinal(&mut self, board: &Board, p: Point) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if board.in_bounds(n) && !board.is_wall(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
