//! Text input of the cell being edited

use crate::grid::CellPosition;

/// Pending text of a single cell edit
///
/// The cursor is a char index into `buffer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub position: CellPosition,
    buffer: String,
    /// Value the input was seeded with
    initial: String,
    cursor: usize,
}

impl EditSession {
    /// Start editing `position`
    ///
    /// A cleared input starts blank; otherwise it starts from `initial` with
    /// the cursor at the end.
    pub fn begin(position: CellPosition, initial: String, clear: bool) -> Self {
        let buffer = if clear { String::new() } else { initial.clone() };
        let cursor = buffer.chars().count();
        Self {
            position,
            buffer,
            initial,
            cursor,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_text(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn is_modified(&self) -> bool {
        self.buffer != self.initial
    }

    /// Value to commit when the edit ends without reverting
    ///
    /// An empty input always commits so a cleared cell is written back even
    /// if it was already empty.
    pub fn commit_value(self) -> Option<String> {
        if self.buffer.is_empty() || self.is_modified() {
            Some(self.buffer)
        } else {
            None
        }
    }
}
