//! The terminal-facing [`Screen`] buffer of styled [`Glyph`]s and the
//! [`Frame`] diffs flushed to drivers.

use crate::geom::{Point, Range};
use crate::matrix::Matrix;
use crate::style::Style;

/// A styled character cell on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A `rows × cols` buffer of glyphs that a [`Model`](crate::Model) draws
/// into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    glyphs: Matrix<Glyph>,
}

impl Screen {
    /// Create a blank screen.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            glyphs: Matrix::new(rows.max(0) as usize, cols.max(0) as usize, Glyph::default()),
        }
    }

    /// The area covered by the screen.
    #[inline]
    pub fn range(&self) -> Range {
        self.glyphs.range()
    }

    /// Glyph at `p`; blank when out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Glyph {
        self.glyphs.at(p).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        self.glyphs.set(p, glyph);
    }

    /// Blank every glyph.
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    /// Write `text` starting at `p`, clipped to the screen width. Returns the
    /// number of glyphs written.
    pub fn text(&mut self, p: Point, text: &str, style: Style) -> usize {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if !self.glyphs.contains(q) {
                break;
            }
            self.set(q, Glyph::new(ch, style));
            n += 1;
        }
        n
    }

    /// Copy every glyph from `src` (same size assumed; extra area ignored).
    pub fn copy_from(&mut self, src: &Screen) {
        for (p, g) in src.glyphs.iter() {
            self.glyphs.set(p, *g);
        }
    }
}

/// A single glyph that changed between two screens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameGlyph {
    pub pos: Point,
    pub glyph: Glyph,
}

/// A set of glyph changes to flush.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
    pub rows: i32,
    pub cols: i32,
}

/// Compute the difference between two same-sized screens.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let range = curr.range();
    let glyphs = range
        .iter()
        .filter_map(|p| {
            let g = curr.at(p);
            (prev.at(p) != g).then_some(FrameGlyph { pos: p, glyph: g })
        })
        .collect();
    Frame {
        glyphs,
        rows: range.rows(),
        cols: range.cols(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_clipped() {
        let mut s = Screen::new(2, 4);
        let n = s.text(Point::new(1, 1), "hello", Style::default());
        assert_eq!(n, 3);
        assert_eq!(s.at(Point::new(1, 1)).ch, 'h');
        assert_eq!(s.at(Point::new(1, 3)).ch, 'l');
        assert_eq!(s.at(Point::new(0, 0)).ch, ' ');
    }

    #[test]
    fn frame_holds_only_changes() {
        let a = Screen::new(2, 3);
        let mut b = Screen::new(2, 3);
        b.set(Point::new(1, 0), Glyph::new('#', Style::default()));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.glyphs.len(), 1);
        assert_eq!(frame.glyphs[0].pos, Point::new(1, 0));
        assert_eq!(frame.rows, 2);
        assert_eq!(frame.cols, 3);
    }

    #[test]
    fn copy_then_diff_is_empty() {
        let mut a = Screen::new(2, 2);
        let mut b = Screen::new(2, 2);
        b.text(Point::ZERO, "ab", Style::default());
        a.copy_from(&b);
        assert!(compute_frame(&a, &b).glyphs.is_empty());
        a.clear();
        assert_eq!(compute_frame(&a, &b).glyphs.len(), 2);
    }
}
