//! Dense row-major [`Matrix`] storage addressed by [`Point`].

use crate::geom::{Point, Range, in_bounds};

/// A fixed-size `rows × cols` grid of values.
///
/// Unlike a nested `Vec<Vec<T>>`, the storage is one flat buffer, so cloning
/// a matrix (as the search snapshots do) is a single allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every entry set to `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Overwrite every entry with `value`.
    pub fn fill(&mut self, value: T) {
        for v in self.data.iter_mut() {
            *v = value.clone();
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The area covered by the matrix.
    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.rows as i32, self.cols as i32)
    }

    /// Whether `p` addresses an entry.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        in_bounds(p, self.rows, self.cols)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.cols + p.col as usize)
    }

    /// Borrow the entry at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.idx(p).map(|i| &self.data[i])
    }

    /// Mutably borrow the entry at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.idx(p).map(|i| &mut self.data[i])
    }

    /// Store `value` at `p`. Returns `false` (and drops the value) when `p`
    /// is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.range().iter().zip(self.data.iter())
    }

    /// Count entries satisfying `pred`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(v)).count()
    }
}

impl<T: Copy> Matrix<T> {
    /// Copy of the entry at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.get(p).copied()
    }
}

impl Matrix<bool> {
    /// Whether `p` is in bounds and flagged.
    #[inline]
    pub fn is_set(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_bounds() {
        let mut m = Matrix::new(2, 3, 0u8);
        assert!(m.set(Point::new(1, 2), 7));
        assert_eq!(m.at(Point::new(1, 2)), Some(7));
        assert_eq!(m.at(Point::new(0, 0)), Some(0));
        assert!(!m.set(Point::new(2, 0), 1));
        assert_eq!(m.at(Point::new(-1, 0)), None);
        assert_eq!(m.at(Point::new(0, 3)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let mut m = Matrix::new(2, 2, 0);
        m.set(Point::new(1, 0), 3);
        let v: Vec<_> = m.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(v[2], (Point::new(1, 0), 3));
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn bool_helpers() {
        let mut m = Matrix::new(3, 3, false);
        m.set(Point::new(1, 1), true);
        assert!(m.is_set(Point::new(1, 1)));
        assert!(!m.is_set(Point::new(5, 5)));
        assert_eq!(m.count(|&v| v), 1);
        m.fill(true);
        assert_eq!(m.count(|&v| v), 9);
    }
}
