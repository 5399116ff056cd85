//! Inclusive ranges and normalized selection rectangles

use std::ops::RangeInclusive;

use super::CellPosition;

/// Ascending inclusive range covering both `a` and `b`, whichever is larger
///
/// `range(5, 2)` and `range(2, 5)` both yield `2, 3, 4, 5`.
pub fn range(a: usize, b: usize) -> RangeInclusive<usize> {
    a.min(b)..=a.max(b)
}

/// Selection rectangle normalized so `top_left <= bottom_right` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top_left: CellPosition,
    pub bottom_right: CellPosition,
}

impl Rect {
    /// Build a rectangle from two corners given in any order
    pub fn from_corners(a: CellPosition, b: CellPosition) -> Self {
        Self {
            top_left: CellPosition::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: CellPosition::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.top_left.row..=self.bottom_right.row
    }

    pub fn cols(&self) -> RangeInclusive<usize> {
        self.top_left.col..=self.bottom_right.col
    }

    pub fn height(&self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    pub fn width(&self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Check if a position lies inside the rectangle
    pub fn contains(&self, pos: CellPosition) -> bool {
        self.rows().contains(&pos.row) && self.cols().contains(&pos.col)
    }

    /// Every position in the rectangle, row-major ascending
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| CellPosition::new(row, col)))
    }
}
