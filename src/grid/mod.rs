//! Grid model
//!
//! A read-only view over externally owned cell data. The grid is an ordered
//! sequence of rows, each an ordered sequence of cells. Rows may differ in
//! length; an index past the end of a row is treated as an absent cell.
//!
//! ```text
//! [Vec<C>]                   (rows, owned by the caller)
//! └── Vec<C>                 (one row)
//!     └── C: CellFlags       (read_only / component / disable_events)
//! ```

mod loader;
mod range;

pub use loader::{detect_delimiter, parse_grid, Delimiter, ParseError};
pub use range::{range, Rect};

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Flags the core reads from a cell. The core never mutates cells.
pub trait CellFlags {
    /// Read-only cells are skipped by editing, clearing and pasting
    fn read_only(&self) -> bool;

    /// True when the cell renders a custom component instead of a text input
    fn is_component(&self) -> bool {
        false
    }

    /// True when the cell ignores mouse interaction
    fn disable_events(&self) -> bool {
        false
    }
}

/// Text overflow behaviour hint for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Wrap,
    Nowrap,
    Clip,
}

/// Default cell record
///
/// Layout attributes (`row_span`, `col_span`, `width`, `overflow`,
/// `class_name`) are carried for the rendering layer and ignored by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    #[serde(default)]
    pub read_only: bool,
    /// Name of the custom component rendered in place of a text input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub disable_events: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Cell {
    /// Create a writable text cell
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Create a read-only text cell
    pub fn new_read_only(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            read_only: true,
            ..Self::default()
        }
    }

    /// Mark this cell as rendering a custom component
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }
}

impl CellFlags for Cell {
    fn read_only(&self) -> bool {
        self.read_only
    }

    fn is_component(&self) -> bool {
        self.component.is_some()
    }

    fn disable_events(&self) -> bool {
        self.disable_events
    }
}

/// Get the cell at a position, or `None` when the row or column is absent
pub fn cell_at<C>(grid: &[Vec<C>], pos: CellPosition) -> Option<&C> {
    grid.get(pos.row).and_then(|row| row.get(pos.col))
}

/// Get the cell at a position, failing with `OutOfBounds` when absent
pub fn require_cell<C>(grid: &[Vec<C>], pos: CellPosition) -> Result<&C, GridError> {
    cell_at(grid, pos).ok_or(GridError::OutOfBounds {
        row: pos.row,
        col: pos.col,
    })
}

/// Check whether a position refers to a cell present in the grid
pub fn contains<C>(grid: &[Vec<C>], pos: CellPosition) -> bool {
    cell_at(grid, pos).is_some()
}

/// Build a grid of writable text cells from raw rows
pub fn grid_from_rows(rows: Vec<Vec<String>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(Cell::new).collect())
        .collect()
}
