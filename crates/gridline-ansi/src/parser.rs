//! Tokenizer for ANSI escape sequences.
//!
//! [`segments`] walks a string and yields alternating runs of visible text and
//! SGR (Select Graphic Rendition) sequences. Everything else that starts with
//! an ESC byte is consumed and dropped, so visible text never carries escape
//! bytes, no matter how broken the input is.
//!
//! Recognized grammar for a control sequence:
//!
//! ```text
//! ESC '[' <parameter bytes 0x30-0x3F>* <intermediate bytes 0x20-0x2F>* <final byte 0x40-0x7E>
//! ```
//!
//! Only sequences whose final byte is `m`, with no intermediates and with
//! parameters made of digits and `;`, are reported as [`Segment::Style`].

use log::trace;

use crate::style::SgrOps;

const ESC: u8 = 0x1b;

/// A piece of parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Visible text. Never empty, never contains ESC.
    Text(&'a str),
    /// A well-formed SGR sequence.
    Style(Sgr<'a>),
}

/// A well-formed SGR escape sequence, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sgr<'a> {
    raw: &'a str,
}

impl<'a> Sgr<'a> {
    /// The complete sequence, `ESC [ ... m`, exactly as it appeared.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The parameter text between `ESC [` and `m`.
    pub fn params(&self) -> &'a str {
        &self.raw[2..self.raw.len() - 1]
    }

    /// Iterates the style operations this sequence encodes.
    pub fn ops(&self) -> SgrOps<'a> {
        SgrOps::new(self.params())
    }

    /// True when the last parameter is `0` or empty, so nothing set earlier in
    /// the sequence survives it.
    pub fn ends_in_reset(&self) -> bool {
        let last = self.params().rsplit(';').next().unwrap_or("");
        last.bytes().all(|b| b == b'0')
    }
}

/// Lazy iterator over the [`Segment`]s of a string.
///
/// A clone resumes from the same position, so cloning before iterating gives
/// a replay of the whole input.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

/// Splits `input` into visible text runs and SGR sequences.
///
/// # Example
///
/// ```rust
/// use gridline_ansi::{segments, Segment};
///
/// let parts: Vec<_> = segments("\x1b[31mred\x1b[0m plain").collect();
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts[1], Segment::Text("red"));
/// assert_eq!(parts[3], Segment::Text(" plain"));
/// ```
pub fn segments(input: &str) -> Segments<'_> {
    Segments { input, pos: 0 }
}

impl<'a> Segments<'a> {
    /// Handles an ESC at `self.pos`. Returns the SGR if the sequence is one,
    /// otherwise advances past whatever was dropped.
    fn escape(&mut self) -> Option<Sgr<'a>> {
        let bytes = self.input.as_bytes();
        let start = self.pos;

        match bytes.get(start + 1) {
            Some(b'[') => self.control_sequence(start),
            Some(&b) if (0x40..=0x5f).contains(&b) => {
                trace!("dropping two-byte escape ESC {:?}", b as char);
                self.pos = start + 2;
                None
            }
            _ => {
                trace!("dropping lone ESC at byte {}", start);
                self.pos = start + 1;
                None
            }
        }
    }

    fn control_sequence(&mut self, start: usize) -> Option<Sgr<'a>> {
        let bytes = self.input.as_bytes();

        let mut i = start + 2;
        while i < bytes.len() && (0x30..=0x3f).contains(&bytes[i]) {
            i += 1;
        }
        let params_end = i;
        while i < bytes.len() && (0x20..=0x2f).contains(&bytes[i]) {
            i += 1;
        }

        match bytes.get(i) {
            Some(&final_byte) if (0x40..=0x7e).contains(&final_byte) => {
                self.pos = i + 1;
                let params = &self.input[start + 2..params_end];
                let is_sgr = final_byte == b'm'
                    && params_end == i
                    && params.bytes().all(|b| b.is_ascii_digit() || b == b';');

                if is_sgr {
                    Some(Sgr {
                        raw: &self.input[start..self.pos],
                    })
                } else {
                    trace!(
                        "dropping non-SGR control sequence {:?}",
                        &self.input[start + 1..self.pos]
                    );
                    None
                }
            }
            Some(_) => {
                // Interrupted sequence: drop what was consumed, keep the rest as text.
                trace!("dropping interrupted control sequence at byte {}", start);
                self.pos = i;
                None
            }
            None => {
                trace!("dropping unterminated control sequence at byte {}", start);
                self.pos = bytes.len();
                None
            }
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let remaining = &self.input[self.pos..];

            match remaining.as_bytes().iter().position(|&b| b == ESC) {
                Some(0) => {
                    if let Some(sgr) = self.escape() {
                        return Some(Segment::Style(sgr));
                    }
                }
                Some(offset) => {
                    self.pos += offset;
                    return Some(Segment::Text(&remaining[..offset]));
                }
                None => {
                    self.pos = self.input.len();
                    return Some(Segment::Text(remaining));
                }
            }
        }

        None
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
