//! Tracing setup and selection diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gridsheet::sheet=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridsheet/logs/gridsheet.log` with daily
//! rotation, always at debug level.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::GridError;
use crate::grid::CellPosition;
use crate::sheet::SelectionState;

/// `~/.config/gridsheet/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join("logs"))
}

fn ensure_logs_dir() -> Result<PathBuf, GridError> {
    let logs = logs_dir()
        .ok_or_else(|| GridError::ConfigIo("no config directory available".to_string()))?;
    std::fs::create_dir_all(&logs).map_err(|e| {
        GridError::ConfigIo(format!("failed to create {}: {}", logs.display(), e))
    })?;
    Ok(logs)
}

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gridsheet.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Snapshot of the selection state for before/after diffs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub start: Option<CellPosition>,
    pub end: Option<CellPosition>,
    pub editing: Option<CellPosition>,
    pub reverting: Option<CellPosition>,
    pub selecting: bool,
    pub force_edit: bool,
}

fn fmt_pos(pos: Option<CellPosition>) -> String {
    pos.map_or_else(|| "-".to_string(), |p| p.to_string())
}

impl SelectionSnapshot {
    pub fn from_state(state: &SelectionState) -> Self {
        Self {
            start: state.start,
            end: state.end,
            editing: state.editing,
            reverting: state.reverting,
            selecting: state.selecting,
            force_edit: state.force_edit,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.start != other.start || self.end != other.end {
            changes.push(format!(
                "selection {}..{} → {}..{}",
                fmt_pos(self.start),
                fmt_pos(self.end),
                fmt_pos(other.start),
                fmt_pos(other.end)
            ));
        }
        if self.editing != other.editing {
            changes.push(format!(
                "editing {} → {}",
                fmt_pos(self.editing),
                fmt_pos(other.editing)
            ));
        }
        if self.reverting != other.reverting {
            changes.push(format!("reverting {}", fmt_pos(other.reverting)));
        }
        if self.selecting != other.selecting {
            changes.push(format!("selecting {}", other.selecting));
        }
        if self.force_edit != other.force_edit {
            changes.push(format!("force_edit {}", other.force_edit));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
