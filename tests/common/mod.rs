//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridsheet::grid::{Cell, CellPosition};
use gridsheet::keyboard::{KeyCode, KeyEvent, Keystroke};
use gridsheet::sheet::SelectionState;
use gridsheet::Props;

/// Grid of writable cells from string rows
pub fn grid(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| row.iter().map(|v| Cell::new(*v)).collect())
        .collect()
}

/// `rows x cols` grid whose values name their coordinates ("r,c")
pub fn numbered_grid(rows: usize, cols: usize) -> Vec<Vec<Cell>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| Cell::new(format!("{},{}", r, c))).collect())
        .collect()
}

pub fn props() -> Props<Cell> {
    Props::for_cells()
        .build()
        .expect("value renderer is set")
}

pub fn pos(row: usize, col: usize) -> CellPosition {
    CellPosition::new(row, col)
}

/// State with a single selected cell
pub fn selected(row: usize, col: usize) -> SelectionState {
    SelectionState {
        start: Some(pos(row, col)),
        end: Some(pos(row, col)),
        ..SelectionState::default()
    }
}

/// State with a rectangular selection
pub fn selected_range(start: (usize, usize), end: (usize, usize)) -> SelectionState {
    SelectionState {
        start: Some(pos(start.0, start.1)),
        end: Some(pos(end.0, end.1)),
        ..SelectionState::default()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(Keystroke::key(code))
}

pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(Keystroke::char(c))
}
