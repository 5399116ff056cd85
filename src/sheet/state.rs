//! Selection and editing state of a grid surface

use serde::Serialize;

use crate::grid::{CellPosition, Rect};

/// Selection/editing state
///
/// Created empty when the surface mounts and reset to empty on a click
/// outside the surface. While `editing` is set, `start` and `end` both equal
/// the edited cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Selection anchor; `None` means nothing is selected
    pub start: Option<CellPosition>,
    /// Moving corner of the selection
    pub end: Option<CellPosition>,
    /// A mouse drag is extending the selection
    pub selecting: bool,
    /// Edit mode was entered explicitly (Enter or double-click)
    pub force_edit: bool,
    /// Cell currently accepting text input
    pub editing: Option<CellPosition>,
    /// Cell whose pending edit must be discarded instead of committed
    pub reverting: Option<CellPosition>,
    /// Cell whose input starts blank because the user began typing
    pub clear: Option<CellPosition>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_selection(&self) -> bool {
        self.start.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Normalized selection rectangle; a missing `end` collapses onto `start`
    pub fn rect(&self) -> Option<Rect> {
        let start = self.start?;
        Some(Rect::from_corners(start, self.end.unwrap_or(start)))
    }

    pub fn is_selected(&self, pos: CellPosition) -> bool {
        self.rect().is_some_and(|rect| rect.contains(pos))
    }

    pub fn is_editing_cell(&self, pos: CellPosition) -> bool {
        self.editing == Some(pos)
    }

    pub fn is_reverting_cell(&self, pos: CellPosition) -> bool {
        self.reverting == Some(pos)
    }

    pub fn is_clear_cell(&self, pos: CellPosition) -> bool {
        self.clear == Some(pos)
    }

    /// Collapse the selection onto a single cell and leave edit mode
    pub fn select_single(&mut self, pos: CellPosition) {
        self.start = Some(pos);
        self.end = Some(pos);
        self.editing = None;
    }

    /// Enter edit mode on `pos`, collapsing the selection onto it
    ///
    /// `clear` blanks the input (typing replaces the value); `force` marks an
    /// explicit edit where arrow keys stay inside the input.
    pub fn begin_edit(&mut self, pos: CellPosition, clear: bool, force: bool) {
        self.start = Some(pos);
        self.end = Some(pos);
        self.editing = Some(pos);
        self.clear = clear.then_some(pos);
        self.reverting = None;
        self.force_edit = force;
    }

    /// True when the editing/selection exclusion holds
    pub fn is_consistent(&self) -> bool {
        match self.editing {
            Some(pos) => self.start == Some(pos) && self.end == Some(pos),
            None => true,
        }
    }
}
