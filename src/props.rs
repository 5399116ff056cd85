//! Renderer callbacks and overrides supplied by the rendering layer
//!
//! The grid data itself is passed separately to every entry point so the
//! caller keeps ownership of it and can apply change requests between events.

use std::fmt;

use crate::error::GridError;
use crate::keyboard::KeyClassTable;

/// `(cell, row, col) -> text`
pub type CellRenderer<C> = Box<dyn Fn(&C, usize, usize) -> String>;
/// `(cell, row, col) -> raw text`, `None` or empty falls back to the display value
pub type DataRenderer<C> = Box<dyn Fn(&C, usize, usize) -> Option<String>>;
/// Clipboard text to a 2-D matrix of raw cell values
pub type PasteParser = Box<dyn Fn(&str) -> Vec<Vec<String>>>;

/// Read-only configuration of a grid surface
pub struct Props<C> {
    pub(crate) value_renderer: CellRenderer<C>,
    pub(crate) data_renderer: Option<DataRenderer<C>>,
    pub(crate) parse_paste: Option<PasteParser>,
    pub(crate) has_paste_handler: bool,
    pub(crate) key_classes: KeyClassTable,
}

impl<C> Props<C> {
    pub fn builder() -> PropsBuilder<C> {
        PropsBuilder::default()
    }

    /// Display value of a cell
    pub fn display_value(&self, cell: &C, row: usize, col: usize) -> String {
        (self.value_renderer)(cell, row, col)
    }

    /// Raw value of a cell, if a data renderer is configured and it yields
    /// a non-empty value
    pub fn raw_value(&self, cell: &C, row: usize, col: usize) -> Option<String> {
        self.data_renderer
            .as_ref()
            .and_then(|render| render(cell, row, col))
            .filter(|value| !value.is_empty())
    }

    /// Raw value with fallback to the display value
    pub fn edit_value(&self, cell: &C, row: usize, col: usize) -> String {
        self.raw_value(cell, row, col)
            .unwrap_or_else(|| self.display_value(cell, row, col))
    }

    /// Initial text of an edit input
    ///
    /// With a data renderer the input edits the raw value even when it is
    /// empty; only a renderer yielding `None` falls back to the display value.
    pub fn edit_seed(&self, cell: &C, row: usize, col: usize) -> String {
        self.data_renderer
            .as_ref()
            .and_then(|render| render(cell, row, col))
            .unwrap_or_else(|| self.display_value(cell, row, col))
    }

    /// True when pasted matrices go to a handler instead of per-cell changes
    pub fn has_paste_handler(&self) -> bool {
        self.has_paste_handler
    }

    pub fn key_classes(&self) -> &KeyClassTable {
        &self.key_classes
    }
}

impl<C> fmt::Debug for Props<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("data_renderer", &self.data_renderer.is_some())
            .field("parse_paste", &self.parse_paste.is_some())
            .field("has_paste_handler", &self.has_paste_handler)
            .field("key_classes", &self.key_classes)
            .finish_non_exhaustive()
    }
}

/// Builder for `Props`; `value_renderer` is required
pub struct PropsBuilder<C> {
    value_renderer: Option<CellRenderer<C>>,
    data_renderer: Option<DataRenderer<C>>,
    parse_paste: Option<PasteParser>,
    has_paste_handler: bool,
    key_classes: KeyClassTable,
}

impl<C> Default for PropsBuilder<C> {
    fn default() -> Self {
        Self {
            value_renderer: None,
            data_renderer: None,
            parse_paste: None,
            has_paste_handler: false,
            key_classes: KeyClassTable::default(),
        }
    }
}

impl<C> PropsBuilder<C> {
    pub fn value_renderer(mut self, render: impl Fn(&C, usize, usize) -> String + 'static) -> Self {
        self.value_renderer = Some(Box::new(render));
        self
    }

    pub fn data_renderer(
        mut self,
        render: impl Fn(&C, usize, usize) -> Option<String> + 'static,
    ) -> Self {
        self.data_renderer = Some(Box::new(render));
        self
    }

    pub fn parse_paste(mut self, parse: impl Fn(&str) -> Vec<Vec<String>> + 'static) -> Self {
        self.parse_paste = Some(Box::new(parse));
        self
    }

    /// Route pasted matrices to the caller's paste handler instead of
    /// emitting per-cell changes
    pub fn with_paste_handler(mut self, enabled: bool) -> Self {
        self.has_paste_handler = enabled;
        self
    }

    pub fn key_classes(mut self, table: KeyClassTable) -> Self {
        self.key_classes = table;
        self
    }

    pub fn build(self) -> Result<Props<C>, GridError> {
        let value_renderer = self
            .value_renderer
            .ok_or_else(|| GridError::Configuration("value_renderer is required".to_string()))?;

        Ok(Props {
            value_renderer,
            data_renderer: self.data_renderer,
            parse_paste: self.parse_paste,
            has_paste_handler: self.has_paste_handler,
            key_classes: self.key_classes,
        })
    }
}

impl Props<crate::grid::Cell> {
    /// Props for the default `Cell` type, rendering `Cell::value`
    pub fn for_cells() -> PropsBuilder<crate::grid::Cell> {
        Self::builder().value_renderer(|cell: &crate::grid::Cell, _, _| cell.value.clone())
    }
}
