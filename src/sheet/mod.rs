//! Selection, editing and keyboard resolution
//!
//! The resolution functions (`handle_key`, `next_location`, `select_cells`)
//! are pure: they read the grid and the current `SelectionState` and return
//! the next state. `DataSheet` is the stateful surface built on top of them.

mod edit;
mod keys;
mod messages;
mod movement;
mod select;
mod state;
mod surface;

pub use edit::EditSession;
pub use keys::{handle_key, KeyOutcome};
pub use messages::{EditMsg, PastedValue, SheetEffect, SheetMsg};
pub use movement::next_location;
pub use select::{select_cells, SelectedCell};
pub use state::SelectionState;
pub use surface::{DataSheet, Subscriptions};
