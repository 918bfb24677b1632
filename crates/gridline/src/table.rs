//! The table builder.

use std::fmt;

use log::debug;

use crate::border::BorderPreset;
use crate::cell::Row;
use crate::config::TableConfig;
use crate::error::Result;
use crate::render::{render_html, Layout};

/// A table of ANSI-styled cells, rendered as bordered text or HTML.
///
/// Setters mutate in place and return `&mut Self` so calls can be chained.
/// Every render recomputes from the current contents.
///
/// # Example
///
/// ```rust
/// use gridline::Table;
///
/// let mut table = Table::new();
/// table
///     .set_header(["Name", "Status"])
///     .add_row(["build", "\x1b[32mok\x1b[0m"])
///     .add_row(["test", "\x1b[31mfailed\x1b[0m"]);
/// table.set_style("ascii")?;
///
/// let text = table.to_string();
/// assert!(text.starts_with("+-------+--------+"));
/// assert_eq!(table.get_height(), text.lines().count());
/// # Ok::<(), gridline::TableError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    preset: BorderPreset,
    max_width: Option<usize>,
}

impl Table {
    /// Creates an empty table with the `modern` preset and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with presentation settings from `config`.
    pub fn with_config(config: &TableConfig) -> Self {
        let mut table = Self::new();
        table.apply_config(config);
        table
    }

    /// Replaces the preset and width budget with those of `config`.
    pub fn apply_config(&mut self, config: &TableConfig) -> &mut Self {
        self.preset = config.style;
        self.max_width = config.width;
        self
    }

    /// Sets or replaces the header row.
    pub fn set_header<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, cells: I) -> &mut Self {
        self.header = Some(Row::new(cells));
        self
    }

    /// Appends a data row.
    pub fn add_row<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, cells: I) -> &mut Self {
        self.rows.push(Row::new(cells));
        self
    }

    /// Appends several data rows.
    pub fn add_rows<R, S, I>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.extend(rows.into_iter().map(Row::new));
        self
    }

    /// Selects a border preset by name.
    ///
    /// Unknown names fail with [`TableError::InvalidPreset`](crate::TableError::InvalidPreset)
    /// and leave the table unchanged.
    pub fn set_style(&mut self, name: &str) -> Result<&mut Self> {
        let preset = name.parse()?;
        Ok(self.set_preset(preset))
    }

    pub fn set_preset(&mut self, preset: BorderPreset) -> &mut Self {
        debug!("table style {} -> {}", self.preset, preset);
        self.preset = preset;
        self
    }

    /// Limits the total visible width of rendered lines.
    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.max_width = Some(width);
        self
    }

    /// Removes the width limit.
    pub fn clear_width(&mut self) -> &mut Self {
        self.max_width = None;
        self
    }

    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn preset(&self) -> BorderPreset {
        self.preset
    }

    pub fn max_width(&self) -> Option<usize> {
        self.max_width
    }

    /// Largest cell count over the header and all rows.
    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(&self.rows)
            .map(Row::len)
            .max()
            .unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there is neither a header nor any row.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }

    /// Resolves widths and wraps every cell.
    pub fn layout(&self) -> Layout {
        Layout::compute(self.header.as_ref(), &self.rows, self.preset, self.max_width)
    }

    /// Number of lines [`to_string`](ToString::to_string) produces.
    pub fn get_height(&self) -> usize {
        self.layout().height()
    }

    /// Renders an HTML `<table>`; styles become nested HTML tags.
    pub fn to_html(&self) -> String {
        render_html(self.header.as_ref(), &self.rows, self.preset)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.layout(), f)
    }
}
