//! Terminal colors and their RGB/CSS resolution.
//!
//! Indexed colors follow the xterm 256-color layout:
//!
//! | Range | Meaning |
//! |-------|---------|
//! | 0-15 | standard and bright colors |
//! | 16-231 | 6x6x6 color cube |
//! | 232-255 | grayscale ramp |

use std::fmt;

/// A foreground or background color as carried by SGR sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// A palette index (`30-37`, `90-97`, `38;5;N`, ...).
    Indexed(u8),
    /// A truecolor value (`38;2;R;G;B`).
    Rgb(u8, u8, u8),
}

// ─── Palette ────────────────────────────────────────────────────────────────

const STANDARD: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => STANDARD[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + (index - 232) * 10;
            (level, level, level)
        }
    }
}

// ─── Color ──────────────────────────────────────────────────────────────────

impl Color {
    /// Resolves the color to an RGB triplet.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Indexed(index) => indexed_to_rgb(index),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// CSS hex notation, `#rrggbb`.
    pub fn css(self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// SGR parameter text selecting this color as foreground.
    pub fn fg_code(self) -> String {
        self.code(30, 90, 38)
    }

    /// SGR parameter text selecting this color as background.
    pub fn bg_code(self) -> String {
        self.code(40, 100, 48)
    }

    fn code(self, standard: u8, bright: u8, extended: u8) -> String {
        match self {
            Color::Indexed(n @ 0..=7) => (standard + n).to_string(),
            Color::Indexed(n @ 8..=15) => (bright + n - 8).to_string(),
            Color::Indexed(n) => format!("{};5;{}", extended, n),
            Color::Rgb(r, g, b) => format!("{};2;{};{};{}", extended, r, g, b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
