//! Message and effect types of the grid surface
//!
//! Input flows into `DataSheet::update` as `SheetMsg`; everything the data
//! owner has to do comes back as `SheetEffect`.

use serde::Serialize;

use crate::grid::CellPosition;
use crate::keyboard::KeyEvent;

/// Events delivered to the surface
#[derive(Debug, Clone)]
pub enum SheetMsg {
    /// Primary button pressed over a cell
    MouseDown(CellPosition),
    /// Pointer entered a cell
    MouseOver(CellPosition),
    /// Primary button released anywhere
    MouseUp,
    DoubleClick(CellPosition),
    ContextMenu(CellPosition),
    /// Pointer pressed outside the surface
    OutsideClick,
    Key(KeyEvent),
    /// Host copy request
    Copy,
    /// Host paste request with the plain-text payload
    Paste(String),
    /// Text input for the cell being edited
    Edit(EditMsg),
    /// A custom component committed a value for its cell
    CommitCell { pos: CellPosition, value: String },
}

/// Text input operations on the active edit session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    InsertChar(char),
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// A pasted value handed to the paste handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PastedValue {
    pub row: usize,
    pub col: usize,
    /// False when the value landed outside the grid
    pub in_grid: bool,
    pub data: String,
}

/// Work for the data owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SheetEffect {
    /// Write `value` into the cell at `(row, col)`
    ChangeCell {
        row: usize,
        col: usize,
        value: String,
    },
    /// The whole pasted matrix, when a paste handler is configured
    PasteMatrix { rows: Vec<Vec<PastedValue>> },
    /// Copy payload for the host clipboard
    SetClipboard { text: String },
    /// The selection's moving corner changed
    Selected { pos: CellPosition },
    ContextMenu { pos: CellPosition },
    /// The triggering host event must not run its default action
    PreventDefault,
}
