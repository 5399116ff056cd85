//! Scripted event replay
//!
//! A script is a YAML sequence of host events:
//!
//! ```yaml
//! - mouse_down: [0, 0]
//! - mouse_over: [1, 1]
//! - mouse_up
//! - key: enter
//! - type: "42"
//! - copy
//! - paste: "a\tb"
//! - outside_click
//! ```
//!
//! `ScriptHost` plays the part of the rendering layer: it forwards events to
//! a `DataSheet`, applies the returned effects to its grid and keeps the
//! clipboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clipboard::SystemClipboard;
use crate::grid::{Cell, CellPosition};
use crate::keyboard::{parse_key_string, KeyEvent, KeyParseError, Keystroke};
use crate::props::Props;
use crate::sheet::{DataSheet, EditMsg, SelectionState, SheetEffect, SheetMsg};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid script: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Key(#[from] KeyParseError),
}

/// One host event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    MouseDown(usize, usize),
    MouseOver(usize, usize),
    MouseUp,
    DoubleClick(usize, usize),
    ContextMenu(usize, usize),
    OutsideClick,
    /// Key chord such as `"shift+tab"`
    Key(String),
    /// Text typed key by key; each character is pressed, then entered into
    /// the active input
    Type(String),
    /// Text input operation on the active input
    Edit(EditOp),
    /// Component commit `{ row, col, value }`
    Commit {
        row: usize,
        col: usize,
        value: String,
    },
    Copy,
    /// Paste explicit text
    Paste(String),
    /// Paste whatever the clipboard holds
    PasteClipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl From<EditOp> for EditMsg {
    fn from(op: EditOp) -> Self {
        match op {
            EditOp::Backspace => EditMsg::DeleteBackward,
            EditOp::Delete => EditMsg::DeleteForward,
            EditOp::Left => EditMsg::CursorLeft,
            EditOp::Right => EditMsg::CursorRight,
            EditOp::Home => EditMsg::CursorHome,
            EditOp::End => EditMsg::CursorEnd,
        }
    }
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Clipboard the host copies to and pastes from
#[derive(Debug)]
pub enum ClipboardBackend {
    Memory(Option<String>),
    System(SystemClipboard),
}

impl ClipboardBackend {
    fn read(&mut self) -> Option<String> {
        match self {
            ClipboardBackend::Memory(text) => text.clone(),
            ClipboardBackend::System(clipboard) => clipboard.read_text(),
        }
    }

    fn write(&mut self, text: String) {
        match self {
            ClipboardBackend::Memory(slot) => *slot = Some(text),
            ClipboardBackend::System(clipboard) => {
                clipboard.write_text(&text);
            }
        }
    }
}

/// Final state of a replay, for JSON output
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    pub state: &'a SelectionState,
    pub editing_buffer: Option<&'a str>,
    pub effects: &'a [SheetEffect],
}

/// In-memory rendering layer driving a `DataSheet`
#[derive(Debug)]
pub struct ScriptHost {
    grid: Vec<Vec<Cell>>,
    sheet: DataSheet<Cell>,
    clipboard: ClipboardBackend,
    effects: Vec<SheetEffect>,
}

impl ScriptHost {
    pub fn new(grid: Vec<Vec<Cell>>, props: Props<Cell>, clipboard: ClipboardBackend) -> Self {
        Self {
            grid,
            sheet: DataSheet::new(props),
            clipboard,
            effects: Vec::new(),
        }
    }

    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn sheet(&self) -> &DataSheet<Cell> {
        &self.sheet
    }

    /// Every effect emitted so far, in order
    pub fn effects(&self) -> &[SheetEffect] {
        &self.effects
    }

    pub fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.read()
    }

    pub fn report(&self) -> ReplayReport<'_> {
        ReplayReport {
            state: self.sheet.state(),
            editing_buffer: self.sheet.edit_session().map(|s| s.buffer()),
            effects: &self.effects,
        }
    }

    pub fn run(&mut self, events: &[ScriptEvent]) -> Result<(), ScriptError> {
        for event in events {
            self.play(event)?;
        }
        Ok(())
    }

    pub fn play(&mut self, event: &ScriptEvent) -> Result<(), ScriptError> {
        tracing::debug!("script event {:?}", event);
        match event {
            ScriptEvent::MouseDown(row, col) => {
                self.send(SheetMsg::MouseDown(CellPosition::new(*row, *col)))
            }
            ScriptEvent::MouseOver(row, col) => {
                self.send(SheetMsg::MouseOver(CellPosition::new(*row, *col)))
            }
            ScriptEvent::MouseUp => self.send(SheetMsg::MouseUp),
            ScriptEvent::DoubleClick(row, col) => {
                self.send(SheetMsg::DoubleClick(CellPosition::new(*row, *col)))
            }
            ScriptEvent::ContextMenu(row, col) => {
                self.send(SheetMsg::ContextMenu(CellPosition::new(*row, *col)))
            }
            ScriptEvent::OutsideClick => self.send(SheetMsg::OutsideClick),
            ScriptEvent::Key(chord) => {
                let keystroke = parse_key_string(chord)?;
                self.send(SheetMsg::Key(KeyEvent::new(keystroke)));
            }
            ScriptEvent::Type(text) => {
                for ch in text.chars() {
                    self.send(SheetMsg::Key(KeyEvent::new(Keystroke::char(ch))));
                    if self.sheet.edit_session().is_some() {
                        self.send(SheetMsg::Edit(EditMsg::InsertChar(ch)));
                    }
                }
            }
            ScriptEvent::Edit(op) => self.send(SheetMsg::Edit((*op).into())),
            ScriptEvent::Commit { row, col, value } => self.send(SheetMsg::CommitCell {
                pos: CellPosition::new(*row, *col),
                value: value.clone(),
            }),
            ScriptEvent::Copy => self.send(SheetMsg::Copy),
            ScriptEvent::Paste(text) => self.send(SheetMsg::Paste(text.clone())),
            ScriptEvent::PasteClipboard => match self.clipboard.read() {
                Some(text) => self.send(SheetMsg::Paste(text)),
                None => tracing::warn!("Clipboard is empty, skipping paste"),
            },
        }
        Ok(())
    }

    fn send(&mut self, msg: SheetMsg) {
        let effects = self.sheet.update(&self.grid, msg);
        for effect in effects {
            self.apply(&effect);
            self.effects.push(effect);
        }
    }

    fn apply(&mut self, effect: &SheetEffect) {
        match effect {
            SheetEffect::ChangeCell { row, col, value } => {
                match self.grid.get_mut(*row).and_then(|r| r.get_mut(*col)) {
                    Some(cell) => cell.value = value.clone(),
                    None => tracing::warn!("Change for missing cell ({}, {})", row, col),
                }
            }
            SheetEffect::SetClipboard { text } => self.clipboard.write(text.clone()),
            SheetEffect::PasteMatrix { rows } => {
                tracing::info!("Paste handler received {} rows", rows.len());
            }
            SheetEffect::Selected { .. }
            | SheetEffect::ContextMenu { .. }
            | SheetEffect::PreventDefault => {}
        }
    }
}

/// Render a grid as tab-separated text, one line per row
pub fn grid_to_tsv(grid: &[Vec<Cell>]) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.value.as_str())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
