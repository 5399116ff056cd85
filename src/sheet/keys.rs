//! Resolving key presses into selection/editing transitions
//!
//! Evaluation order, first match wins:
//!
//! 1. movement key (arrows, Tab) → move the selection, leave edit mode
//! 2. Delete/Backspace while not editing → clear every writable selected cell
//! 3. Enter while editing → commit and step one row down when possible
//! 4. Escape while editing → leave edit mode and discard the pending value
//! 5. Enter on a writable cell → explicit edit keeping the current value
//! 6. printable key on a writable cell → edit starting from a blank input
//!
//! Nothing happens without a selection or while Ctrl/Meta is held; those
//! chords belong to the clipboard shortcuts.

use crate::error::GridError;
use crate::grid::{contains, require_cell, CellFlags, CellPosition};
use crate::keyboard::KeyEvent;
use crate::props::Props;

use super::movement::next_location;
use super::select::{select_cells, SelectedCell};
use super::state::SelectionState;

/// Result of resolving a key press
#[derive(Debug)]
pub enum KeyOutcome<'a, C> {
    /// The key has no effect; nothing to re-render or apply
    NoChange,
    /// The state changed; `clean_cells` must be cleared by the data owner
    Changed {
        state: SelectionState,
        clean_cells: Vec<SelectedCell<'a, C>>,
    },
}

impl<C> KeyOutcome<'_, C> {
    pub fn is_change(&self) -> bool {
        matches!(self, KeyOutcome::Changed { .. })
    }

    fn state(state: SelectionState) -> Self {
        KeyOutcome::Changed {
            state,
            clean_cells: Vec::new(),
        }
    }
}

/// Resolve a key press against the current state
///
/// Consumed keys that would otherwise scroll or move focus are marked with
/// `KeyEvent::prevent_default`. Fails with `OutOfBounds` when the selection
/// anchor or rectangle is not in `grid`.
pub fn handle_key<'a, C: CellFlags>(
    event: &mut KeyEvent,
    grid: &'a [Vec<C>],
    props: &Props<C>,
    state: &SelectionState,
) -> Result<KeyOutcome<'a, C>, GridError> {
    let Some(start) = state.start else {
        return Ok(KeyOutcome::NoChange);
    };
    if event.mods().has_shortcut() {
        return Ok(KeyOutcome::NoChange);
    }

    let keystroke = event.keystroke;
    let is_editing = state.is_editing();

    if let Some(location) = next_location(start, state.force_edit, is_editing, grid, keystroke)? {
        event.prevent_default();
        let mut next = state.clone();
        next.select_single(location);
        return Ok(KeyOutcome::state(next));
    }

    let read_only = require_cell(grid, start)?.read_only();

    if keystroke.is_delete() && !is_editing {
        event.prevent_default();
        let clean_cells = select_cells(grid, start, state.end.unwrap_or(start), false)?;
        let mut next = state.clone();
        next.editing = None;
        return Ok(KeyOutcome::Changed {
            state: next,
            clean_cells,
        });
    }

    if keystroke.is_enter() && is_editing {
        let mut next = state.clone();
        next.editing = None;
        next.reverting = None;
        let below = CellPosition::new(start.row + 1, start.col);
        if contains(grid, below) {
            next.start = Some(below);
            next.end = Some(below);
        }
        return Ok(KeyOutcome::state(next));
    }

    if keystroke.is_escape() && is_editing {
        let mut next = state.clone();
        next.reverting = state.editing;
        next.editing = None;
        return Ok(KeyOutcome::state(next));
    }

    if keystroke.is_enter() && !is_editing && !read_only {
        let mut next = state.clone();
        next.begin_edit(start, false, true);
        return Ok(KeyOutcome::state(next));
    }

    if !is_editing && !read_only && props.key_classes().is_printable(keystroke.key) {
        let mut next = state.clone();
        next.begin_edit(start, true, false);
        return Ok(KeyOutcome::state(next));
    }

    Ok(KeyOutcome::NoChange)
}
