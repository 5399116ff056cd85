//! DataSheet surface tests
//!
//! Drives the controller the way a rendering layer would: send a message,
//! apply the returned effects to the grid, repeat.

mod common;

use common::*;
use gridsheet::grid::Cell;
use gridsheet::keyboard::KeyCode;
use gridsheet::sheet::{DataSheet, EditMsg, SheetEffect, SheetMsg};
use gridsheet::Props;

struct Harness {
    grid: Vec<Vec<Cell>>,
    sheet: DataSheet<Cell>,
    log: Vec<SheetEffect>,
}

impl Harness {
    fn new(grid: Vec<Vec<Cell>>) -> Self {
        Self::with_props(grid, props())
    }

    fn with_props(grid: Vec<Vec<Cell>>, props: Props<Cell>) -> Self {
        Self {
            grid,
            sheet: DataSheet::new(props),
            log: Vec::new(),
        }
    }

    fn send(&mut self, msg: SheetMsg) -> Vec<SheetEffect> {
        let effects = self.sheet.update(&self.grid, msg);
        for effect in &effects {
            if let SheetEffect::ChangeCell { row, col, value } = effect {
                self.grid[*row][*col].value = value.clone();
            }
        }
        self.log.extend(effects.iter().cloned());
        effects
    }

    fn click(&mut self, row: usize, col: usize) {
        self.send(SheetMsg::MouseDown(pos(row, col)));
        self.send(SheetMsg::MouseUp);
    }

    fn values(&self) -> Vec<Vec<&str>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|c| c.value.as_str()).collect())
            .collect()
    }
}

#[test]
fn test_drag_select_then_delete() {
    let mut h = Harness::new(numbered_grid(3, 3));
    h.grid[1][1].read_only = true;

    h.send(SheetMsg::MouseDown(pos(0, 0)));
    h.send(SheetMsg::MouseOver(pos(1, 1)));
    h.send(SheetMsg::MouseUp);
    let effects = h.send(SheetMsg::Key(key(KeyCode::Delete)));

    assert_eq!(effects[0], SheetEffect::PreventDefault);
    assert_eq!(
        h.values(),
        vec![
            vec!["", "", "0,2"],
            vec!["", "1,1", "1,2"],
            vec!["2,0", "2,1", "2,2"],
        ]
    );
}

#[test]
fn test_typed_edit_commits_when_moving_away() {
    let mut h = Harness::new(numbered_grid(2, 2));
    h.click(0, 0);

    h.send(SheetMsg::Key(char_key('n')));
    h.send(SheetMsg::Edit(EditMsg::InsertText("new".into())));
    h.send(SheetMsg::Key(key(KeyCode::Right)));

    assert_eq!(h.values()[0], vec!["new", "0,1"]);
    assert_eq!(h.sheet.state().start, Some(pos(0, 1)));
    assert!(h.sheet.edit_session().is_none());
}

#[test]
fn test_forced_edit_keeps_arrows_in_input() {
    let mut h = Harness::new(grid(&[&["abc", "x"]]));
    h.click(0, 0);
    h.send(SheetMsg::Key(key(KeyCode::Enter)));

    let effects = h.send(SheetMsg::Key(key(KeyCode::Right)));
    assert!(effects.is_empty());
    assert!(h.sheet.is_editing(pos(0, 0)));

    h.send(SheetMsg::Edit(EditMsg::CursorHome));
    h.send(SheetMsg::Edit(EditMsg::DeleteForward));
    h.send(SheetMsg::Key(key(KeyCode::Enter)));
    assert_eq!(h.values()[0], vec!["bc", "x"]);
}

#[test]
fn test_unchanged_edit_emits_nothing() {
    let mut h = Harness::new(grid(&[&["same"], &["next"]]));
    h.click(0, 0);
    h.send(SheetMsg::DoubleClick(pos(0, 0)));
    let effects = h.send(SheetMsg::Key(key(KeyCode::Enter)));

    assert_eq!(effects, vec![SheetEffect::Selected { pos: pos(1, 0) }]);
}

#[test]
fn test_cleared_edit_commits_empty_value() {
    let mut h = Harness::new(grid(&[&["old"]]));
    h.click(0, 0);
    h.send(SheetMsg::Key(char_key('x')));
    h.send(SheetMsg::Key(key(KeyCode::Enter)));

    assert_eq!(h.values(), vec![vec![""]]);
}

#[test]
fn test_escape_then_retype_commits() {
    let mut h = Harness::new(grid(&[&["v"]]));
    h.click(0, 0);
    h.send(SheetMsg::Key(char_key('a')));
    h.send(SheetMsg::Edit(EditMsg::InsertChar('a')));
    h.send(SheetMsg::Key(key(KeyCode::Escape)));
    assert_eq!(h.values(), vec![vec!["v"]]);
    assert!(h.sheet.is_reverting(pos(0, 0)));

    h.send(SheetMsg::Key(char_key('b')));
    assert!(!h.sheet.is_reverting(pos(0, 0)));
    h.send(SheetMsg::Edit(EditMsg::InsertChar('b')));
    h.send(SheetMsg::Key(key(KeyCode::Enter)));
    assert_eq!(h.values(), vec![vec!["b"]]);
}

#[test]
fn test_edit_seeded_from_raw_value() {
    let props = Props::for_cells()
        .value_renderer(|cell: &Cell, _, _| format!("= {}", cell.value))
        .data_renderer(|cell: &Cell, _, _| Some(cell.value.clone()))
        .build()
        .unwrap();
    let mut h = Harness::with_props(grid(&[&["=A1+1"]]), props);
    h.click(0, 0);
    h.send(SheetMsg::DoubleClick(pos(0, 0)));

    assert_eq!(h.sheet.edit_session().unwrap().buffer(), "=A1+1");
}

#[test]
fn test_copy_paste_between_regions() {
    let mut h = Harness::new(grid(&[&["1", "2", "", ""], &["3", "4", "", ""]]));
    h.send(SheetMsg::MouseDown(pos(0, 0)));
    h.send(SheetMsg::MouseOver(pos(1, 1)));
    h.send(SheetMsg::MouseUp);

    let text = h
        .send(SheetMsg::Copy)
        .into_iter()
        .find_map(|e| match e {
            SheetEffect::SetClipboard { text } => Some(text),
            _ => None,
        })
        .unwrap();

    h.click(0, 2);
    let effects = h.send(SheetMsg::Paste(text));

    assert_eq!(h.values()[0], vec!["1", "2", "1", "2"]);
    assert_eq!(h.values()[1], vec!["3", "4", "3", "4"]);
    assert_eq!(effects.last(), Some(&SheetEffect::Selected { pos: pos(1, 3) }));
    assert!(h.sheet.is_selected(pos(1, 3)));
}

#[test]
fn test_copy_and_paste_ignored_while_editing() {
    let mut h = Harness::new(numbered_grid(2, 2));
    h.click(0, 0);
    h.send(SheetMsg::DoubleClick(pos(0, 0)));

    assert!(h.send(SheetMsg::Copy).is_empty());
    assert!(h.send(SheetMsg::Paste("zzz".into())).is_empty());
    assert_eq!(h.values()[0][0], "0,0");
}

#[test]
fn test_selected_fires_only_on_new_end() {
    let mut h = Harness::new(numbered_grid(2, 2));
    h.send(SheetMsg::MouseDown(pos(0, 0)));
    h.send(SheetMsg::MouseOver(pos(0, 0)));
    h.send(SheetMsg::MouseOver(pos(0, 1)));
    h.send(SheetMsg::MouseOver(pos(0, 1)));

    let selected: Vec<_> = h
        .log
        .iter()
        .filter_map(|e| match e {
            SheetEffect::Selected { pos } => Some(*pos),
            _ => None,
        })
        .collect();
    assert_eq!(selected, vec![pos(0, 0), pos(0, 1)]);
}

#[test]
fn test_outside_click_commits_pending_edit() {
    let mut h = Harness::new(grid(&[&["a"]]));
    h.click(0, 0);
    h.send(SheetMsg::DoubleClick(pos(0, 0)));
    h.send(SheetMsg::Edit(EditMsg::InsertChar('b')));
    h.send(SheetMsg::OutsideClick);

    assert_eq!(h.values(), vec![vec!["ab"]]);
    assert!(!h.sheet.is_subscribed());
    assert!(!h.sheet.state().has_selection());
}

#[test]
fn test_double_click_read_only_does_not_edit() {
    let mut h = Harness::new(vec![vec![Cell::new_read_only("header")]]);
    h.click(0, 0);
    h.send(SheetMsg::DoubleClick(pos(0, 0)));
    assert!(!h.sheet.state().is_editing());
}
