//! Copy: selected rectangle to tab/newline text

use crate::error::GridError;
use crate::grid::{require_cell, CellPosition, Rect};
use crate::props::Props;
use crate::sheet::SelectionState;

/// A copy request from the host
///
/// The grid installs its plain-text payload with `set_text` and suppresses
/// the host's own copy action.
#[derive(Debug, Clone, Default)]
pub struct CopyEvent {
    text: Option<String>,
    default_prevented: bool,
}

impl CopyEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Plain-text payload installed by the grid, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Serialize the rectangle spanned by `start` and `end`
///
/// Each cell contributes its raw value when the data renderer yields a
/// non-empty one, else its display value. Columns are joined with `\t`,
/// rows with `\n`.
pub fn serialize_range<C>(
    grid: &[Vec<C>],
    start: CellPosition,
    end: CellPosition,
    props: &Props<C>,
) -> Result<String, GridError> {
    let rect = Rect::from_corners(start, end);
    let mut rows = Vec::with_capacity(rect.height());

    for row in rect.rows() {
        let mut cells = Vec::with_capacity(rect.width());
        for col in rect.cols() {
            let cell = require_cell(grid, CellPosition::new(row, col))?;
            cells.push(props.edit_value(cell, row, col));
        }
        rows.push(cells.join("\t"));
    }

    Ok(rows.join("\n"))
}

/// Handle a copy request for the current selection
///
/// Returns `None` without touching the event when nothing is selected.
pub fn handle_copy<C>(
    event: &mut CopyEvent,
    grid: &[Vec<C>],
    props: &Props<C>,
    state: &SelectionState,
) -> Result<Option<String>, GridError> {
    let Some(start) = state.start else {
        return Ok(None);
    };

    event.prevent_default();
    let text = serialize_range(grid, start, state.end.unwrap_or(start), props)?;
    event.set_text(text.clone());
    tracing::debug!(bytes = text.len(), "copied selection");

    Ok(Some(text))
}
