//! Command-line argument parsing for the gridsheet driver

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::grid::Delimiter;

/// Replay grid interaction scripts against a delimited file
#[derive(Parser, Debug)]
#[command(name = "gridsheet", version, about = "Replay grid interaction scripts")]
pub struct CliArgs {
    /// CSV/TSV/PSV file to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// YAML event script to replay
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Field delimiter (default: from extension, else sniffed)
    #[arg(short, long, value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// Treat the first row as a read-only header
    #[arg(long)]
    pub read_only_header: bool,

    /// Copy and paste through the OS clipboard
    #[arg(long)]
    pub system_clipboard: bool,

    /// Config file (default: ~/.config/gridsheet/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final state and effects as JSON after the grid
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Pipe => Delimiter::Pipe,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
        }
    }
}

impl CliArgs {
    /// Explicit delimiter, else the file extension's, else `None` to sniff
    pub fn resolve_delimiter(&self) -> Option<Delimiter> {
        if let Some(arg) = self.delimiter {
            return Some(arg.into());
        }
        let ext = self.file.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "tsv" | "psv" => Some(Delimiter::from_extension(ext)),
            _ => None,
        }
    }
}
