//! # gridline
//!
//! Bordered text tables and HTML tables for cells that carry ANSI colors and
//! emphasis.
//!
//! Widths are always measured on *visible* text: escape sequences count as
//! zero columns and wide characters as two, so colored cells line up exactly
//! like plain ones.
//!
//! ## Pieces
//!
//! - [`Table`]: collects a header and rows, a [`BorderPreset`] and an optional
//!   width budget, and renders them.
//! - [`resolve`]: column width resolution. Natural widths when they fit,
//!   proportional shares of the budget when they do not.
//! - [`wrap`]: word wrapping that keeps styles intact across line breaks.
//! - [`border`]: the preset glyph records.
//! - [`render`]: layout, text composition and HTML export.
//!
//! ANSI parsing and ANSI-to-HTML conversion live in [`gridline_ansi`],
//! re-exported as [`ansi`].
//!
//! ## Example
//!
//! ```rust
//! use gridline::Table;
//!
//! let mut table = Table::new();
//! table
//!     .set_header(["\x1b[1mKey\x1b[0m", "Value"])
//!     .add_row(["color", "\x1b[34mblue\x1b[0m"])
//!     .add_row(["notes", "first line\nsecond line"]);
//!
//! let text = table.to_string();
//! assert_eq!(
//!     text,
//!     "\
//! ┌───────┬─────────────┐
//! │ \x1b[1mKey\x1b[0m   │ Value       │
//! ╞═══════╪═════════════╡
//! │ color │ \x1b[34mblue\x1b[0m        │
//! ├───────┼─────────────┤
//! │ notes │ first line  │
//! │       │ second line │
//! └───────┴─────────────┘"
//! );
//!
//! let html = table.to_html();
//! assert!(html.contains("<th><b>Key</b></th>"));
//! ```

pub mod border;
pub mod cell;
pub mod config;
pub mod error;
pub mod render;
pub mod resolve;
pub mod table;
pub mod wrap;

pub use border::{BorderPreset, BorderStyle};
pub use cell::Row;
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use render::{Layout, RowLayout};
pub use resolve::ResolvedWidths;
pub use table::Table;
pub use wrap::{wrap_cell, WrappedLine};

pub use gridline_ansi as ansi;
pub use gridline_ansi::{convert_ansi_to_html, convert_ansi_to_html_with_options, HtmlOptions};
