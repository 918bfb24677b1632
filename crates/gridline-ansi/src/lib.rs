//! # gridline-ansi
//!
//! ANSI SGR escape handling for terminal-styled text.
//!
//! - [`segments`] splits a string into visible text and SGR style changes,
//!   consuming every other escape sequence (cursor movement, OSC, broken or
//!   truncated sequences) so that it never leaks into output.
//! - [`SgrState`] tracks the attributes active at a point of the string and can
//!   serialize itself back into one SGR sequence.
//! - [`convert_ansi_to_html`] renders styled text as HTML with properly nested
//!   tags.
//!
//! Width helpers measure *visible* width: escape sequences count as zero
//! columns and wide characters (CJK, most emoji) as two. Width is taken per
//! grapheme cluster, so flags, emoji presentation sequences and ZWJ sequences
//! measure the way a terminal draws them.
//!
//! ```rust
//! use gridline_ansi::{strip_ansi, visible_width};
//!
//! let styled = "\x1b[1;32mok\x1b[0m 你好";
//! assert_eq!(strip_ansi(styled), "ok 你好");
//! assert_eq!(visible_width(styled), 7);
//! ```

pub mod color;
pub mod html;
pub mod parser;
pub mod style;

pub use color::Color;
pub use html::{
    convert_ansi_to_html, convert_ansi_to_html_with_options, escape_html_into, Converter,
    HtmlOptions,
};
pub use parser::{segments, Segment, Segments, Sgr};
pub use style::{SgrOp, SgrOps, SgrState, RESET};

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// True for clusters made only of control characters (`\r\n` included).
#[inline]
pub fn is_control_cluster(cluster: &str) -> bool {
    cluster.chars().all(char::is_control)
}

/// Display width of one grapheme cluster. Control clusters are zero-width.
#[inline]
pub fn cluster_width(cluster: &str) -> usize {
    if is_control_cluster(cluster) {
        0
    } else {
        cluster.width()
    }
}

/// Display width of plain text, summed over its grapheme clusters.
pub fn text_width(text: &str) -> usize {
    text.graphemes(true).map(cluster_width).sum()
}

/// Display width of `s` with all escape sequences ignored.
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .map(|segment| match segment {
            Segment::Text(text) => text_width(text),
            Segment::Style(_) => 0,
        })
        .sum()
}

/// Returns `s` with all escape sequences removed.
pub fn strip_ansi(s: &str) -> String {
    segments(s)
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Style(_) => None,
        })
        .collect()
}
