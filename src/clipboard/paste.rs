//! Paste: tab/newline text onto the grid
//!
//! Pasting happens in three steps: parse the clipboard text into a matrix
//! (default parser or the caller's override), check the matrix shape, then
//! map each value onto the cell at `start + (i, j)`.

use crate::error::GridError;
use crate::grid::{cell_at, CellFlags, CellPosition};
use crate::props::Props;
use crate::sheet::SelectionState;

/// A paste request carrying the host's plain-text clipboard payload
#[derive(Debug, Clone, Default)]
pub struct PasteEvent {
    text: String,
}

impl PasteEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A pasted value with the grid cell it landed on, if the grid has one
#[derive(Debug)]
pub struct PastedCell<'a, C> {
    pub cell: Option<&'a C>,
    pub data: String,
}

/// A writable cell that receives a pasted value
#[derive(Debug)]
pub struct ChangedCell<'a, C> {
    pub cell: &'a C,
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Outcome of a paste
#[derive(Debug)]
pub struct PasteResult<'a, C> {
    pub pasted_data: Vec<Vec<PastedCell<'a, C>>>,
    /// Last writable cell touched in row-major order
    pub end: Option<CellPosition>,
    pub changed_cells: Vec<ChangedCell<'a, C>>,
}

impl<C> Default for PasteResult<'_, C> {
    fn default() -> Self {
        Self {
            pasted_data: Vec::new(),
            end: None,
            changed_cells: Vec::new(),
        }
    }
}

/// Default paste parser
///
/// Splits rows on `\r\n`, `\n` or `\r`, then columns on `\t`. A trailing
/// line break yields a final row holding one empty value.
pub fn parse_paste(text: &str) -> Vec<Vec<String>> {
    text.replace("\r\n", "\n")
        .split(|c: char| c == '\n' || c == '\r')
        .map(|row| row.split('\t').map(str::to_string).collect())
        .collect()
}

/// Check that a parsed matrix is non-empty and rectangular
pub fn validate_shape(matrix: &[Vec<String>]) -> Result<(), GridError> {
    let Some(first) = matrix.first() else {
        return Err(GridError::InvalidPasteShape("no rows".to_string()));
    };
    if first.is_empty() {
        return Err(GridError::InvalidPasteShape("empty first row".to_string()));
    }
    if let Some((i, row)) = matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != first.len())
    {
        return Err(GridError::InvalidPasteShape(format!(
            "row {} has {} columns, expected {}",
            i,
            row.len(),
            first.len()
        )));
    }
    Ok(())
}

/// Drop the empty row a trailing line break leaves behind
///
/// Only multi-column blocks are trimmed, since there the `[""]` row would
/// fail the shape check. A single-column payload keeps it and pastes an
/// empty value into the cell below.
fn strip_trailing_terminator(matrix: &mut Vec<Vec<String>>) {
    let multi_column = matrix.first().is_some_and(|row| row.len() > 1);
    let ends_with_terminator = multi_column
        && matrix.len() > 1
        && matrix
            .last()
            .is_some_and(|row| row.len() == 1 && row[0].is_empty());
    if ends_with_terminator {
        matrix.pop();
    }
}

/// Map a parsed matrix onto the grid starting at `start`
///
/// Values landing on an existing writable cell become `ChangedCell`s and
/// advance `end`, unless a paste handler takes the whole matrix instead.
/// Values past the grid edge keep `cell: None`.
pub fn apply_paste<'a, C: CellFlags>(
    grid: &'a [Vec<C>],
    start: CellPosition,
    matrix: Vec<Vec<String>>,
    has_paste_handler: bool,
) -> PasteResult<'a, C> {
    let mut result = PasteResult::default();

    for (i, row) in matrix.into_iter().enumerate() {
        let mut pasted_row = Vec::with_capacity(row.len());
        for (j, data) in row.into_iter().enumerate() {
            let pos = CellPosition::new(start.row + i, start.col + j);
            let cell = cell_at(grid, pos);

            if let Some(cell) = cell {
                if !cell.read_only() && !has_paste_handler {
                    result.changed_cells.push(ChangedCell {
                        cell,
                        row: pos.row,
                        col: pos.col,
                        value: data.clone(),
                    });
                    result.end = Some(pos);
                }
            }

            pasted_row.push(PastedCell { cell, data });
        }
        result.pasted_data.push(pasted_row);
    }

    result
}

/// Handle a paste request at the selection anchor
///
/// A matrix with an invalid shape is logged and produces no changed cells;
/// the parsed values are still reported in `pasted_data`.
pub fn handle_paste<'a, C: CellFlags>(
    event: &PasteEvent,
    grid: &'a [Vec<C>],
    props: &Props<C>,
    state: &SelectionState,
) -> PasteResult<'a, C> {
    let Some(start) = state.start else {
        return PasteResult::default();
    };

    let matrix = match &props.parse_paste {
        Some(parse) => parse(event.text()),
        None => {
            let mut matrix = parse_paste(event.text());
            strip_trailing_terminator(&mut matrix);
            matrix
        }
    };

    let shape = validate_shape(&matrix);
    let mut result = apply_paste(grid, start, matrix, props.has_paste_handler());

    if let Err(e) = shape {
        tracing::warn!("Ignoring paste at {}: {}", start, e);
        result.changed_cells.clear();
        result.end = None;
    }

    tracing::debug!(
        rows = result.pasted_data.len(),
        changed = result.changed_cells.len(),
        "pasted at {}",
        start
    );
    result
}
