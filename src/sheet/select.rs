//! Collecting the cells inside a selection rectangle

use crate::error::GridError;
use crate::grid::{require_cell, CellFlags, CellPosition, Rect};

/// A cell inside the selection, with its coordinates
#[derive(Debug)]
pub struct SelectedCell<'a, C> {
    pub cell: &'a C,
    pub row: usize,
    pub col: usize,
}

impl<C> SelectedCell<'_, C> {
    pub fn position(&self) -> CellPosition {
        CellPosition::new(self.row, self.col)
    }
}

impl<C> Clone for SelectedCell<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SelectedCell<'_, C> {}

/// Cells in the rectangle spanned by `start` and `end`, row-major ascending
///
/// Read-only cells are skipped unless `include_read_only` is set. A position
/// inside the rectangle that a jagged grid does not have is an error.
pub fn select_cells<'a, C: CellFlags>(
    grid: &'a [Vec<C>],
    start: CellPosition,
    end: CellPosition,
    include_read_only: bool,
) -> Result<Vec<SelectedCell<'a, C>>, GridError> {
    let mut selected = Vec::new();

    for pos in Rect::from_corners(start, end).positions() {
        let cell = require_cell(grid, pos)?;
        if include_read_only || !cell.read_only() {
            selected.push(SelectedCell {
                cell,
                row: pos.row,
                col: pos.col,
            });
        }
    }

    Ok(selected)
}
