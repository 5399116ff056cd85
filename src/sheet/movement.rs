//! Keyboard cell movement
//!
//! Computes the next selection anchor for Tab/Shift+Tab and the arrow keys.
//! Unlike the clamping navigation of a text view, a move that would leave
//! the grid is cancelled outright.

use crate::error::GridError;
use crate::grid::{contains, require_cell, CellFlags, CellPosition};
use crate::keyboard::{KeyCode, Keystroke};

/// Next anchor for a movement key, or `None` when the key does not move
///
/// While a cell is being edited, movement is suppressed unless the cell is a
/// plain text cell entered by typing (`force_edit == false`), or the key is
/// Tab, which always moves. Tab wraps to the first column of the next row
/// when the current row has no cell to the right.
///
/// Fails with `OutOfBounds` when `start` itself is not in the grid.
pub fn next_location<C: CellFlags>(
    start: CellPosition,
    force_edit: bool,
    is_editing: bool,
    grid: &[Vec<C>],
    keystroke: Keystroke,
) -> Result<Option<CellPosition>, GridError> {
    let cell = require_cell(grid, start)?;
    let tab = keystroke.is_tab();

    if is_editing && !tab && (force_edit || cell.is_component()) {
        return Ok(None);
    }

    let candidate = match keystroke.key {
        KeyCode::Tab if !keystroke.mods.shift() => {
            let right = CellPosition::new(start.row, start.col + 1);
            if contains(grid, right) {
                Some(right)
            } else {
                Some(CellPosition::new(start.row + 1, 0))
            }
        }
        KeyCode::Tab | KeyCode::Left => start
            .col
            .checked_sub(1)
            .map(|col| CellPosition::new(start.row, col)),
        KeyCode::Right => Some(CellPosition::new(start.row, start.col + 1)),
        KeyCode::Up => start
            .row
            .checked_sub(1)
            .map(|row| CellPosition::new(row, start.col)),
        KeyCode::Down => Some(CellPosition::new(start.row + 1, start.col)),
        _ => None,
    };

    Ok(candidate.filter(|pos| contains(grid, *pos)))
}
