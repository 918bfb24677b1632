//! SGR operations and the style state they drive.

use std::str::Split;

use crate::color::Color;
use crate::parser::Sgr;

/// Sequence that clears every SGR attribute.
pub const RESET: &str = "\x1b[0m";

/// A single style change decoded from SGR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrOp {
    /// `0`: clear everything.
    Reset,
    /// `1`
    Bold,
    /// `3`
    Italic,
    /// `4`
    Underline,
    /// `9`
    Strikethrough,
    /// `22`: neither bold nor faint.
    NormalIntensity,
    /// `23`
    NoItalic,
    /// `24`
    NoUnderline,
    /// `29`
    NoStrikethrough,
    /// `30-37`, `90-97`, `38;5;N`, `38;2;R;G;B`
    Foreground(Color),
    /// `39`
    DefaultForeground,
    /// `40-47`, `100-107`, `48;5;N`, `48;2;R;G;B`
    Background(Color),
    /// `49`
    DefaultBackground,
}

/// Iterator over the [`SgrOp`]s of a parameter string such as `1;38;5;208`.
///
/// Unknown codes and malformed extended colors are skipped.
#[derive(Debug, Clone)]
pub struct SgrOps<'a> {
    items: Split<'a, char>,
}

impl<'a> SgrOps<'a> {
    pub(crate) fn new(params: &'a str) -> Self {
        Self {
            items: params.split(';'),
        }
    }

    /// Reads the `5;N` or `2;R;G;B` tail of an extended color.
    fn extended_color(&mut self) -> Option<Color> {
        match self.next_param()? {
            5 => {
                let index = self.next_param()?;
                u8::try_from(index).ok().map(Color::Indexed)
            }
            2 => {
                let r = self.next_param()?;
                let g = self.next_param()?;
                let b = self.next_param()?;
                match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
                    (Ok(r), Ok(g), Ok(b)) => Some(Color::Rgb(r, g, b)),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn next_param(&mut self) -> Option<u32> {
        self.items.next().and_then(parse_param)
    }
}

/// Empty parameters mean `0`; anything that does not fit a `u32` is unknown.
fn parse_param(item: &str) -> Option<u32> {
    if item.is_empty() {
        Some(0)
    } else {
        item.parse().ok()
    }
}

fn indexed(base: u32, code: u32, offset: u8) -> Color {
    // Callers guarantee `code - base` is in 0..8.
    Color::Indexed((code - base) as u8 + offset)
}

impl Iterator for SgrOps<'_> {
    type Item = SgrOp;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.items.next()?;
            let Some(code) = parse_param(item) else {
                continue;
            };

            let op = match code {
                0 => SgrOp::Reset,
                1 => SgrOp::Bold,
                3 => SgrOp::Italic,
                4 => SgrOp::Underline,
                9 => SgrOp::Strikethrough,
                22 => SgrOp::NormalIntensity,
                23 => SgrOp::NoItalic,
                24 => SgrOp::NoUnderline,
                29 => SgrOp::NoStrikethrough,
                30..=37 => SgrOp::Foreground(indexed(30, code, 0)),
                38 => match self.extended_color() {
                    Some(color) => SgrOp::Foreground(color),
                    None => continue,
                },
                39 => SgrOp::DefaultForeground,
                40..=47 => SgrOp::Background(indexed(40, code, 0)),
                48 => match self.extended_color() {
                    Some(color) => SgrOp::Background(color),
                    None => continue,
                },
                49 => SgrOp::DefaultBackground,
                90..=97 => SgrOp::Foreground(indexed(90, code, 8)),
                100..=107 => SgrOp::Background(indexed(100, code, 8)),
                _ => continue,
            };

            return Some(op);
        }
    }
}

/// The set of attributes active at some point of a styled string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SgrState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl SgrState {
    /// Applies one operation.
    pub fn apply(&mut self, op: SgrOp) {
        match op {
            SgrOp::Reset => *self = Self::default(),
            SgrOp::Bold => self.bold = true,
            SgrOp::Italic => self.italic = true,
            SgrOp::Underline => self.underline = true,
            SgrOp::Strikethrough => self.strikethrough = true,
            SgrOp::NormalIntensity => self.bold = false,
            SgrOp::NoItalic => self.italic = false,
            SgrOp::NoUnderline => self.underline = false,
            SgrOp::NoStrikethrough => self.strikethrough = false,
            SgrOp::Foreground(color) => self.foreground = Some(color),
            SgrOp::DefaultForeground => self.foreground = None,
            SgrOp::Background(color) => self.background = Some(color),
            SgrOp::DefaultBackground => self.background = None,
        }
    }

    /// Applies every operation of a parsed sequence, in order.
    pub fn apply_sgr(&mut self, sgr: &Sgr<'_>) {
        for op in sgr.ops() {
            self.apply(op);
        }
    }

    /// True when no attribute is active.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Serializes the state as a single SGR sequence that re-creates it from a
    /// reset terminal. Returns an empty string for the plain state.
    ///
    /// ```rust
    /// use gridline_ansi::{Color, SgrState};
    ///
    /// let state = SgrState {
    ///     bold: true,
    ///     foreground: Some(Color::Indexed(1)),
    ///     ..SgrState::default()
    /// };
    /// assert_eq!(state.escape(), "\x1b[1;31m");
    /// assert_eq!(SgrState::default().escape(), "");
    /// ```
    pub fn escape(&self) -> String {
        if self.is_plain() {
            return String::new();
        }

        let mut codes: Vec<String> = Vec::with_capacity(6);
        if self.bold {
            codes.push("1".into());
        }
        if self.italic {
            codes.push("3".into());
        }
        if self.underline {
            codes.push("4".into());
        }
        if self.strikethrough {
            codes.push("9".into());
        }
        if let Some(color) = self.foreground {
            codes.push(color.fg_code());
        }
        if let Some(color) = self.background {
            codes.push(color.bg_code());
        }

        format!("\x1b[{}m", codes.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(params: &str) -> Vec<SgrOp> {
        SgrOps::new(params).collect()
    }

    mod decoding {
        use super::*;

        #[test]
        fn empty_is_reset() {
            assert_eq!(ops(""), vec![SgrOp::Reset]);
            assert_eq!(ops(";"), vec![SgrOp::Reset, SgrOp::Reset]);
        }

        #[test]
        fn attributes() {
            assert_eq!(
                ops("1;3;4;9"),
                vec![
                    SgrOp::Bold,
                    SgrOp::Italic,
                    SgrOp::Underline,
                    SgrOp::Strikethrough
                ]
            );
            assert_eq!(
                ops("22;23;24;29"),
                vec![
                    SgrOp::NormalIntensity,
                    SgrOp::NoItalic,
                    SgrOp::NoUnderline,
                    SgrOp::NoStrikethrough
                ]
            );
        }

        #[test]
        fn standard_colors() {
            assert_eq!(ops("31"), vec![SgrOp::Foreground(Color::Indexed(1))]);
            assert_eq!(ops("47"), vec![SgrOp::Background(Color::Indexed(7))]);
            assert_eq!(ops("92"), vec![SgrOp::Foreground(Color::Indexed(10))]);
            assert_eq!(ops("107"), vec![SgrOp::Background(Color::Indexed(15))]);
            assert_eq!(ops("39;49"), vec![SgrOp::DefaultForeground, SgrOp::DefaultBackground]);
        }

        #[test]
        fn palette_colors() {
            assert_eq!(ops("38;5;208"), vec![SgrOp::Foreground(Color::Indexed(208))]);
            assert_eq!(ops("48;5;0"), vec![SgrOp::Background(Color::Indexed(0))]);
        }

        #[test]
        fn truecolor() {
            assert_eq!(
                ops("38;2;255;128;0"),
                vec![SgrOp::Foreground(Color::Rgb(255, 128, 0))]
            );
            assert_eq!(
                ops("1;48;2;1;2;3;4"),
                vec![
                    SgrOp::Bold,
                    SgrOp::Background(Color::Rgb(1, 2, 3)),
                    SgrOp::Underline
                ]
            );
        }

        #[test]
        fn unknown_codes_skipped() {
            assert!(ops("999").is_empty());
            assert!(ops("2;5;7").is_empty());
            assert_eq!(ops("31;99;999"), vec![SgrOp::Foreground(Color::Indexed(1))]);
        }

        #[test]
        fn oversized_numbers_skipped() {
            assert_eq!(ops("99999999999;1"), vec![SgrOp::Bold]);
        }

        #[test]
        fn broken_extended_colors_skipped() {
            assert!(ops("38;5;300").is_empty());
            assert!(ops("38;5").is_empty());
            assert!(ops("38;2;1;2").is_empty());
            assert!(ops("38;2;256;0;0").is_empty());
            assert!(ops("38;7").is_empty());
        }
    }

    mod state {
        use super::*;

        #[test]
        fn apply_and_clear() {
            let mut state = SgrState::default();
            state.apply(SgrOp::Bold);
            state.apply(SgrOp::Foreground(Color::Indexed(2)));
            assert!(state.bold);
            assert_eq!(state.foreground, Some(Color::Indexed(2)));

            state.apply(SgrOp::NormalIntensity);
            assert!(!state.bold);
            state.apply(SgrOp::Reset);
            assert!(state.is_plain());
        }

        #[test]
        fn escape_orders_codes() {
            let state = SgrState {
                bold: true,
                italic: true,
                underline: true,
                strikethrough: true,
                foreground: Some(Color::Indexed(9)),
                background: Some(Color::Rgb(1, 2, 3)),
            };
            assert_eq!(state.escape(), "\x1b[1;3;4;9;91;48;2;1;2;3m");
        }

        #[test]
        fn escape_roundtrips_through_ops() {
            let state = SgrState {
                underline: true,
                foreground: Some(Color::Indexed(200)),
                background: Some(Color::Indexed(4)),
                ..SgrState::default()
            };
            let escape = state.escape();
            let params = &escape[2..escape.len() - 1];

            let mut rebuilt = SgrState::default();
            for op in SgrOps::new(params) {
                rebuilt.apply(op);
            }
            assert_eq!(rebuilt, state);
        }
    }
}
