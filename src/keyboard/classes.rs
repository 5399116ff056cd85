//! Printable key classes
//!
//! Typing a key from one of these classes on a selected cell starts an edit
//! that replaces the cell's value. Which legacy key codes belong to which
//! class depends on keyboard layout, so the table is plain configuration
//! data and can be overridden from `config.yaml`.

use serde::{Deserialize, Serialize};

use super::types::KeyCode;

/// Class of a key that starts a fresh edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Digit,
    Letter,
    Numpad,
    Equation,
}

/// Inclusive range of legacy key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRange {
    pub from: u32,
    pub to: u32,
}

impl CodeRange {
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, code: u32) -> bool {
        (self.from..=self.to).contains(&code)
    }
}

/// Mapping from legacy key codes to key classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyClassTable {
    pub digits: CodeRange,
    pub letters: CodeRange,
    pub numpad: CodeRange,
    /// `= + - . * / ,` on the main block and numpad
    pub equation: Vec<u32>,
}

impl Default for KeyClassTable {
    fn default() -> Self {
        Self {
            digits: CodeRange::new(48, 57),
            letters: CodeRange::new(65, 90),
            numpad: CodeRange::new(96, 105),
            // 106 (numpad *), 111 (numpad /), 188 (,) and 191 (/) extend
            // the baseline `= - .` and numpad `+ - .` codes
            equation: vec![187, 189, 190, 107, 109, 110, 106, 111, 188, 191],
        }
    }
}

impl KeyClassTable {
    /// Classify a legacy key code
    pub fn classify_code(&self, code: u32) -> Option<KeyClass> {
        if self.digits.contains(code) {
            Some(KeyClass::Digit)
        } else if self.letters.contains(code) {
            Some(KeyClass::Letter)
        } else if self.numpad.contains(code) {
            Some(KeyClass::Numpad)
        } else if self.equation.contains(&code) {
            Some(KeyClass::Equation)
        } else {
            None
        }
    }

    /// Classify a key; keys without a legacy code have no class
    pub fn classify(&self, key: KeyCode) -> Option<KeyClass> {
        key.legacy_code().and_then(|code| self.classify_code(code))
    }

    /// True when the key starts a fresh edit
    pub fn is_printable(&self, key: KeyCode) -> bool {
        self.classify(key).is_some()
    }
}
