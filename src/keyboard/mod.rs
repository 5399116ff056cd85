//! Keyboard input for the grid surface
//!
//! - `types`: keys, modifiers, keystrokes and the `KeyEvent` wrapper
//! - `classes`: the configurable printable-key table
//! - `parse`: keystroke strings such as `"shift+tab"`

mod classes;
mod parse;
mod types;

pub use classes::{CodeRange, KeyClass, KeyClassTable};
pub use parse::{parse_key_string, KeyParseError};
pub use types::{KeyCode, KeyEvent, Keystroke, Modifiers};
