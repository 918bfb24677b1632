//! Border presets and their glyph records.
//!
//! A [`BorderPreset`] names one of a closed set of border grammars; its
//! [`BorderStyle`] is a constant record of glyphs plus the toggles that decide
//! which lines and separators are drawn at all.
//!
//! ```text
//! modern            rounded           horizontal_only
//! ┌─────┬─────┐     ╭─────┬─────╮     ──────────
//! │ A   │ B   │     │ A   │ B   │      A    B
//! ╞═════╪═════╡     ├─────┼─────┤     ──────────
//! │ 1   │ 2   │     │ 1   │ 2   │      1    2
//! ├─────┼─────┤     │ 3   │ 4   │      3    4
//! │ 3   │ 4   │     ╰─────┴─────╯     ──────────
//! └─────┴─────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Spaces on each side of a cell's content.
pub const CELL_PADDING: usize = 1;

/// Glyphs and drawing toggles for one border grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub top_joint: char,
    pub bottom_joint: char,
    pub left_joint: char,
    pub right_joint: char,
    pub cross: char,
    pub header_horizontal: char,
    pub header_left: char,
    pub header_right: char,
    pub header_cross: char,
    /// Left and right frame edges.
    pub outer_vertical: bool,
    /// Top and bottom frame lines.
    pub outer_horizontal: bool,
    /// Separators between columns.
    pub inner_vertical: bool,
    /// Separators between data rows.
    pub inner_horizontal: bool,
    /// Line under the header.
    pub header_separator: bool,
}

impl BorderStyle {
    pub const ASCII: BorderStyle = BorderStyle {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        top_joint: '+',
        bottom_joint: '+',
        left_joint: '+',
        right_joint: '+',
        cross: '+',
        header_horizontal: '=',
        header_left: '+',
        header_right: '+',
        header_cross: '+',
        outer_vertical: true,
        outer_horizontal: true,
        inner_vertical: true,
        inner_horizontal: true,
        header_separator: true,
    };

    pub const MODERN: BorderStyle = BorderStyle {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        top_joint: '┬',
        bottom_joint: '┴',
        left_joint: '├',
        right_joint: '┤',
        cross: '┼',
        header_horizontal: '═',
        header_left: '╞',
        header_right: '╡',
        header_cross: '╪',
        outer_vertical: true,
        outer_horizontal: true,
        inner_vertical: true,
        inner_horizontal: true,
        header_separator: true,
    };

    pub const ROUNDED: BorderStyle = BorderStyle {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        header_horizontal: '─',
        header_left: '├',
        header_right: '┤',
        header_cross: '┼',
        inner_horizontal: false,
        ..BorderStyle::MODERN
    };

    pub const BORDERS_ONLY: BorderStyle = BorderStyle {
        inner_vertical: false,
        inner_horizontal: false,
        header_separator: false,
        ..BorderStyle::MODERN
    };

    pub const HORIZONTAL_ONLY: BorderStyle = BorderStyle {
        header_horizontal: '─',
        outer_vertical: false,
        inner_vertical: false,
        inner_horizontal: false,
        ..BorderStyle::MODERN
    };

    pub const NONE: BorderStyle = BorderStyle {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        horizontal: ' ',
        vertical: ' ',
        top_joint: ' ',
        bottom_joint: ' ',
        left_joint: ' ',
        right_joint: ' ',
        cross: ' ',
        header_horizontal: ' ',
        header_left: ' ',
        header_right: ' ',
        header_cross: ' ',
        outer_vertical: false,
        outer_horizontal: false,
        inner_vertical: false,
        inner_horizontal: false,
        header_separator: false,
    };

    /// Columns taken by everything except cell content: frame edges, column
    /// separators and cell padding.
    pub fn overhead(&self, columns: usize) -> usize {
        let outer = if self.outer_vertical { 2 } else { 0 };
        let inner = if self.inner_vertical {
            columns.saturating_sub(1)
        } else {
            0
        };
        outer + inner + 2 * CELL_PADDING * columns
    }
}

/// The named border presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BorderPreset {
    /// `+`, `-`, `|`, with `=` under the header.
    Ascii,
    /// Light box drawing with a double header separator.
    #[default]
    Modern,
    /// Rounded corners, no separators between data rows.
    Rounded,
    /// Outer frame only.
    BordersOnly,
    /// Top, bottom and header lines only.
    HorizontalOnly,
    /// Nothing but padding.
    NoBorders,
}

impl BorderPreset {
    pub const ALL: [BorderPreset; 6] = [
        BorderPreset::Ascii,
        BorderPreset::Modern,
        BorderPreset::Rounded,
        BorderPreset::BordersOnly,
        BorderPreset::HorizontalOnly,
        BorderPreset::NoBorders,
    ];

    pub const NAMES: [&'static str; 6] = [
        "ascii",
        "modern",
        "rounded",
        "borders_only",
        "horizontal_only",
        "no_borders",
    ];

    pub fn name(self) -> &'static str {
        match self {
            BorderPreset::Ascii => "ascii",
            BorderPreset::Modern => "modern",
            BorderPreset::Rounded => "rounded",
            BorderPreset::BordersOnly => "borders_only",
            BorderPreset::HorizontalOnly => "horizontal_only",
            BorderPreset::NoBorders => "no_borders",
        }
    }

    pub fn style(self) -> &'static BorderStyle {
        match self {
            BorderPreset::Ascii => &BorderStyle::ASCII,
            BorderPreset::Modern => &BorderStyle::MODERN,
            BorderPreset::Rounded => &BorderStyle::ROUNDED,
            BorderPreset::BordersOnly => &BorderStyle::BORDERS_ONLY,
            BorderPreset::HorizontalOnly => &BorderStyle::HORIZONTAL_ONLY,
            BorderPreset::NoBorders => &BorderStyle::NONE,
        }
    }
}

impl FromStr for BorderPreset {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| TableError::InvalidPreset(s.to_string()))
    }
}

impl TryFrom<String> for BorderPreset {
    type Error = TableError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<BorderPreset> for String {
    fn from(preset: BorderPreset) -> Self {
        preset.name().to_string()
    }
}

impl fmt::Display for BorderPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
