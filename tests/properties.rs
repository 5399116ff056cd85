// Property-based tests for range, selection, movement and clipboard logic.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use common::props;
use gridsheet::clipboard::{parse_paste, serialize_range};
use gridsheet::grid::{contains, range, Cell, CellPosition};
use gridsheet::keyboard::{KeyCode, Keystroke, Modifiers};
use gridsheet::sheet::{next_location, select_cells};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_cell() -> impl Strategy<Value = Cell> {
    (r"[a-z0-9 ,.=]{0,6}", any::<bool>()).prop_map(|(value, read_only)| Cell {
        value,
        read_only,
        ..Cell::default()
    })
}

/// Rectangular grid with at least one cell
fn arb_rect_grid() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(arb_cell(), cols), rows)
    })
}

/// Rows of varying length, some possibly empty, with at least one cell
fn arb_jagged_grid() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..6), 1..6)
        .prop_filter("grid has a cell", |g| g.iter().any(|row| !row.is_empty()))
}

fn positions(grid: &[Vec<Cell>]) -> Vec<CellPosition> {
    grid.iter()
        .enumerate()
        .flat_map(|(r, row)| (0..row.len()).map(move |c| CellPosition::new(r, c)))
        .collect()
}

/// A grid plus two corners inside it
fn arb_grid_with_rect() -> impl Strategy<Value = (Vec<Vec<Cell>>, CellPosition, CellPosition)> {
    arb_rect_grid().prop_flat_map(|g| {
        let rows = g.len();
        let cols = g[0].len();
        (
            Just(g),
            (0..rows, 0..cols).prop_map(|(r, c)| CellPosition::new(r, c)),
            (0..rows, 0..cols).prop_map(|(r, c)| CellPosition::new(r, c)),
        )
    })
}

/// A jagged grid plus an existing anchor cell
fn arb_grid_with_anchor() -> impl Strategy<Value = (Vec<Vec<Cell>>, CellPosition)> {
    arb_jagged_grid().prop_flat_map(|g| {
        let cells = positions(&g);
        (Just(g), prop::sample::select(cells))
    })
}

fn arb_movement_key() -> impl Strategy<Value = Keystroke> {
    prop_oneof![
        Just(Keystroke::key(KeyCode::Tab)),
        Just(Keystroke::new(KeyCode::Tab, Modifiers::SHIFT)),
        Just(Keystroke::key(KeyCode::Up)),
        Just(Keystroke::key(KeyCode::Down)),
        Just(Keystroke::key(KeyCode::Left)),
        Just(Keystroke::key(KeyCode::Right)),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_range_is_symmetric(a in 0usize..1000, b in 0usize..1000) {
        prop_assert_eq!(range(a, b), range(b, a));
        prop_assert!(range(a, b).contains(&a));
        prop_assert!(range(a, b).contains(&b));
    }

    #[test]
    fn prop_select_excluding_read_only_is_subset((g, start, end) in arb_grid_with_rect()) {
        let all: HashSet<_> = select_cells(&g, start, end, true)
            .unwrap()
            .iter()
            .map(|c| c.position())
            .collect();
        let writable: HashSet<_> = select_cells(&g, start, end, false)
            .unwrap()
            .iter()
            .map(|c| c.position())
            .collect();

        prop_assert!(writable.is_subset(&all));
        for pos in all.difference(&writable) {
            prop_assert!(g[pos.row][pos.col].read_only);
        }
        for pos in &writable {
            prop_assert!(!g[pos.row][pos.col].read_only);
        }
    }

    #[test]
    fn prop_selection_is_row_major((g, start, end) in arb_grid_with_rect()) {
        let cells = select_cells(&g, start, end, true).unwrap();
        let order: Vec<_> = cells.iter().map(|c| (c.row, c.col)).collect();
        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(order, sorted);
    }

    #[test]
    fn prop_movement_stays_in_grid(
        (g, start) in arb_grid_with_anchor(),
        keystroke in arb_movement_key(),
        force_edit in any::<bool>(),
        is_editing in any::<bool>(),
    ) {
        let next = next_location(start, force_edit, is_editing, &g, keystroke).unwrap();
        if let Some(pos) = next {
            prop_assert!(contains(&g, pos));
            prop_assert_ne!(pos, start);
        }
    }

    #[test]
    fn prop_copy_text_parses_back_to_values((g, start, end) in arb_grid_with_rect()) {
        let text = serialize_range(&g, start, end, &props()).unwrap();
        let expected: Vec<Vec<String>> = select_cells(&g, start, end, true)
            .unwrap()
            .chunks(start.col.abs_diff(end.col) + 1)
            .map(|row| row.iter().map(|c| c.cell.value.clone()).collect())
            .collect();

        prop_assert_eq!(parse_paste(&text), expected);
    }
}
