//! gridsheet - spreadsheet-style grid interaction core
//!
//! Selection, keyboard navigation, in-cell editing and clipboard exchange
//! for a grid of externally owned cells. The rendering layer feeds pointer,
//! key and clipboard events into a `DataSheet` and applies the returned
//! effects to its data.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod grid;
pub mod keyboard;
pub mod props;
pub mod script;
pub mod sheet;
pub mod tracing;

// Re-export commonly used types
pub use config::SheetConfig;
pub use error::GridError;
pub use grid::{Cell, CellFlags, CellPosition};
pub use props::Props;
pub use sheet::{DataSheet, SelectionState, SheetEffect, SheetMsg};
