//! Grid surface controller
//!
//! `DataSheet` ties the pieces together: it owns the selection state, routes
//! pointer, keyboard and clipboard messages through the resolution functions
//! and turns their outcomes into `SheetEffect`s. The grid is borrowed per
//! message; the caller applies the effects to its own data.
//!
//! ```text
//! SheetMsg ──► DataSheet::update ──► SelectionState (+ EditSession)
//!                     │
//!                     └──► Vec<SheetEffect> ──► data owner
//! ```

use crate::clipboard::{handle_copy, handle_paste, CopyEvent, PasteEvent};
use crate::error::GridError;
use crate::grid::{cell_at, require_cell, CellFlags, CellPosition};
use crate::props::Props;
use crate::tracing::SelectionSnapshot;

use super::edit::EditSession;
use super::keys::{handle_key, KeyOutcome};
use super::messages::{EditMsg, PastedValue, SheetEffect, SheetMsg};
use super::state::SelectionState;

/// Document-level listeners held while the surface is active
///
/// Attached by the first mouse-down on a cell. Keyboard and clipboard
/// messages are only handled while attached. Dropping the guard detaches
/// everything.
#[derive(Debug)]
pub struct Subscriptions {
    mouse_up: bool,
}

impl Subscriptions {
    fn attach() -> Self {
        tracing::debug!("attached key, clipboard and pointer listeners");
        Self { mouse_up: true }
    }

    fn rearm_mouse_up(&mut self) {
        self.mouse_up = true;
    }

    fn release_mouse_up(&mut self) {
        if self.mouse_up {
            self.mouse_up = false;
            tracing::debug!("released mouse-up listener");
        }
    }

    pub fn listens_for_mouse_up(&self) -> bool {
        self.mouse_up
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        tracing::debug!("released all surface listeners");
    }
}

/// Interactive grid surface
pub struct DataSheet<C> {
    props: Props<C>,
    state: SelectionState,
    subscriptions: Option<Subscriptions>,
    edit: Option<EditSession>,
}

impl<C> std::fmt::Debug for DataSheet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSheet")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions)
            .field("edit", &self.edit)
            .finish()
    }
}

impl<C: CellFlags> DataSheet<C> {
    pub fn new(props: Props<C>) -> Self {
        Self {
            props,
            state: SelectionState::default(),
            subscriptions: None,
            edit: None,
        }
    }

    pub fn props(&self) -> &Props<C> {
        &self.props
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Text input of the cell being edited, if it is a plain cell
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscriptions.is_some()
    }

    pub fn subscriptions(&self) -> Option<&Subscriptions> {
        self.subscriptions.as_ref()
    }

    pub fn is_selected(&self, pos: CellPosition) -> bool {
        self.state.is_selected(pos)
    }

    pub fn is_editing(&self, pos: CellPosition) -> bool {
        self.state.is_editing_cell(pos)
    }

    pub fn is_reverting(&self, pos: CellPosition) -> bool {
        self.state.is_reverting_cell(pos)
    }

    pub fn is_clear(&self, pos: CellPosition) -> bool {
        self.state.is_clear_cell(pos)
    }

    /// Process one message
    ///
    /// A message that fails (e.g. a coordinate the grid does not have) is
    /// logged and leaves the surface untouched.
    pub fn update(&mut self, grid: &[Vec<C>], msg: SheetMsg) -> Vec<SheetEffect> {
        let before = SelectionSnapshot::from_state(&self.state);
        let prev_end = self.state.end;
        let label = msg_label(&msg);

        let mut effects = match self.dispatch(grid, msg) {
            Ok(effects) => effects,
            Err(e) => {
                tracing::warn!("Ignoring {} message: {}", label, e);
                return Vec::new();
            }
        };

        self.sync_edit_session(grid, &mut effects);

        if self.state.end != prev_end {
            if let Some(pos) = self.state.end {
                effects.push(SheetEffect::Selected { pos });
            }
        }

        if let Some(diff) = before.diff(&SelectionSnapshot::from_state(&self.state)) {
            tracing::debug!("{}: {}", label, diff);
        }
        debug_assert!(self.state.is_consistent());

        effects
    }

    fn dispatch(&mut self, grid: &[Vec<C>], msg: SheetMsg) -> Result<Vec<SheetEffect>, GridError> {
        match msg {
            SheetMsg::MouseDown(pos) => {
                if require_cell(grid, pos)?.disable_events() {
                    return Ok(Vec::new());
                }
                let keep_editing = self.state.editing == Some(pos);
                self.state.selecting = true;
                self.state.start = Some(pos);
                self.state.end = Some(pos);
                self.state.editing = keep_editing.then_some(pos);
                self.state.force_edit = false;

                match self.subscriptions.as_mut() {
                    Some(subs) => subs.rearm_mouse_up(),
                    None => self.subscriptions = Some(Subscriptions::attach()),
                }
                Ok(Vec::new())
            }

            SheetMsg::MouseOver(pos) => {
                if require_cell(grid, pos)?.disable_events() {
                    return Ok(Vec::new());
                }
                if self.state.selecting && !self.state.is_editing() {
                    self.state.end = Some(pos);
                }
                Ok(Vec::new())
            }

            SheetMsg::MouseUp => {
                if let Some(subs) = self
                    .subscriptions
                    .as_mut()
                    .filter(|subs| subs.listens_for_mouse_up())
                {
                    self.state.selecting = false;
                    subs.release_mouse_up();
                }
                Ok(Vec::new())
            }

            SheetMsg::DoubleClick(pos) => {
                let cell = require_cell(grid, pos)?;
                if !cell.disable_events() && !cell.read_only() {
                    self.state.begin_edit(pos, false, true);
                }
                Ok(Vec::new())
            }

            SheetMsg::ContextMenu(pos) => {
                if require_cell(grid, pos)?.disable_events() {
                    return Ok(Vec::new());
                }
                Ok(vec![SheetEffect::ContextMenu { pos }])
            }

            SheetMsg::OutsideClick => {
                self.state = SelectionState::default();
                self.subscriptions = None;
                Ok(Vec::new())
            }

            SheetMsg::Key(mut event) => {
                if !self.is_subscribed() {
                    return Ok(Vec::new());
                }
                let outcome = handle_key(&mut event, grid, &self.props, &self.state)?;

                let mut effects = Vec::new();
                if event.default_prevented() {
                    effects.push(SheetEffect::PreventDefault);
                }
                if let KeyOutcome::Changed { state, clean_cells } = outcome {
                    self.state = state;
                    effects.extend(clean_cells.iter().map(|c| SheetEffect::ChangeCell {
                        row: c.row,
                        col: c.col,
                        value: String::new(),
                    }));
                }
                Ok(effects)
            }

            SheetMsg::Copy => {
                if !self.is_subscribed() || self.state.is_editing() {
                    return Ok(Vec::new());
                }
                let mut event = CopyEvent::new();
                let copied = handle_copy(&mut event, grid, &self.props, &self.state)?;

                let mut effects = Vec::new();
                if event.default_prevented() {
                    effects.push(SheetEffect::PreventDefault);
                }
                if let Some(text) = copied {
                    effects.push(SheetEffect::SetClipboard { text });
                }
                Ok(effects)
            }

            SheetMsg::Paste(text) => {
                if !self.is_subscribed() || self.state.is_editing() {
                    return Ok(Vec::new());
                }
                let Some(start) = self.state.start else {
                    return Ok(Vec::new());
                };
                let result = handle_paste(&PasteEvent::new(text), grid, &self.props, &self.state);

                self.state.end = Some(result.end.unwrap_or(start));
                self.state.editing = None;

                if self.props.has_paste_handler() {
                    let rows = result
                        .pasted_data
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            row.iter()
                                .enumerate()
                                .map(|(j, pasted)| PastedValue {
                                    row: start.row + i,
                                    col: start.col + j,
                                    in_grid: pasted.cell.is_some(),
                                    data: pasted.data.clone(),
                                })
                                .collect()
                        })
                        .collect();
                    Ok(vec![SheetEffect::PasteMatrix { rows }])
                } else {
                    Ok(result
                        .changed_cells
                        .into_iter()
                        .map(|c| SheetEffect::ChangeCell {
                            row: c.row,
                            col: c.col,
                            value: c.value,
                        })
                        .collect())
                }
            }

            SheetMsg::Edit(edit) => {
                match self.edit.as_mut() {
                    Some(session) => apply_edit(session, edit),
                    None => tracing::debug!("no active edit session for {:?}", edit),
                }
                Ok(Vec::new())
            }

            SheetMsg::CommitCell { pos, value } => {
                require_cell(grid, pos)?;
                if self.edit.as_ref().is_some_and(|s| s.position == pos) {
                    self.edit = None;
                }
                self.state.editing = None;
                Ok(vec![SheetEffect::ChangeCell {
                    row: pos.row,
                    col: pos.col,
                    value,
                }])
            }
        }
    }

    /// Commit or discard a finished edit and seed a newly started one
    fn sync_edit_session(&mut self, grid: &[Vec<C>], effects: &mut Vec<SheetEffect>) {
        let still_editing = self
            .edit
            .as_ref()
            .is_some_and(|session| self.state.editing == Some(session.position));

        if !still_editing {
            if let Some(session) = self.edit.take() {
                let pos = session.position;
                if self.state.reverting == Some(pos) {
                    tracing::debug!("discarded edit at {}", pos);
                } else if let Some(value) = session.commit_value() {
                    tracing::debug!("committing edit at {}", pos);
                    effects.push(SheetEffect::ChangeCell {
                        row: pos.row,
                        col: pos.col,
                        value,
                    });
                }
            }
        }

        let Some(pos) = self.state.editing else {
            return;
        };
        if self.edit.is_some() {
            return;
        }
        if let Some(cell) = cell_at(grid, pos).filter(|cell| !cell.is_component()) {
            let seed = self.props.edit_seed(cell, pos.row, pos.col);
            self.edit = Some(EditSession::begin(pos, seed, self.state.clear == Some(pos)));
        }
    }
}

fn apply_edit(session: &mut EditSession, edit: EditMsg) {
    match edit {
        EditMsg::InsertChar(ch) => session.insert_char(ch),
        EditMsg::InsertText(text) => session.insert_text(&text),
        EditMsg::DeleteBackward => session.delete_backward(),
        EditMsg::DeleteForward => session.delete_forward(),
        EditMsg::CursorLeft => session.cursor_left(),
        EditMsg::CursorRight => session.cursor_right(),
        EditMsg::CursorHome => session.cursor_home(),
        EditMsg::CursorEnd => session.cursor_end(),
    }
}

fn msg_label(msg: &SheetMsg) -> &'static str {
    match msg {
        SheetMsg::MouseDown(_) => "mouse_down",
        SheetMsg::MouseOver(_) => "mouse_over",
        SheetMsg::MouseUp => "mouse_up",
        SheetMsg::DoubleClick(_) => "double_click",
        SheetMsg::ContextMenu(_) => "context_menu",
        SheetMsg::OutsideClick => "outside_click",
        SheetMsg::Key(_) => "key",
        SheetMsg::Copy => "copy",
        SheetMsg::Paste(_) => "paste",
        SheetMsg::Edit(_) => "edit",
        SheetMsg::CommitCell { .. } => "commit_cell",
    }
}
