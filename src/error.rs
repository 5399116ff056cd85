//! Error types for the grid core

use thiserror::Error;

/// Errors raised by grid resolution functions and configuration loading
///
/// "No applicable transition" is never an error; resolution functions return
/// a no-op outcome for that.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate refers to a row or column absent from the grid
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// The paste parser produced an empty or non-rectangular matrix
    #[error("invalid paste shape: {0}")]
    InvalidPasteShape(String),

    /// A required accessor was not supplied when building props
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("config I/O error: {0}")]
    ConfigIo(String),

    #[error("invalid config: {0}")]
    ConfigParse(String),
}
