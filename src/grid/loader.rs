//! Loading a grid from delimited text using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, ragged rows and custom delimiters.

use std::io::Cursor;

use super::{grid_from_rows, Cell};

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Error type for grid parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Grid parse error at line {}: {}", line, self.message),
            None => write!(f, "Grid parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse delimited content into a grid of writable cells
///
/// Rows keep their own lengths; short rows are not padded.
pub fn parse_grid(content: &str, delimiter: Delimiter) -> Result<Vec<Vec<Cell>>, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<String>> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
        }
    }

    tracing::debug!(rows = rows.len(), ?delimiter, "parsed grid");
    Ok(grid_from_rows(rows))
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
