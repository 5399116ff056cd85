//! Clipboard interchange
//!
//! Copy turns the selected rectangle into tab/newline text; paste parses
//! such text back into a matrix and maps it onto the grid.

mod copy;
mod paste;
mod system;

pub use copy::{handle_copy, serialize_range, CopyEvent};
pub use paste::{
    apply_paste, handle_paste, parse_paste, validate_shape, ChangedCell, PasteEvent, PasteResult,
    PastedCell,
};
pub use system::SystemClipboard;
