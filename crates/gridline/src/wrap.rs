//! Word wrapping for ANSI-styled cell text.
//!
//! A cell is split on `\n` into paragraphs, each paragraph into words and gaps,
//! and words are packed greedily into lines of a fixed visible width. Words
//! longer than a line are split between grapheme clusters, so a flag or an
//! emoji sequence always stays whole. Escape sequences never count toward
//! width and are never split.
//!
//! Every produced line is self-contained: a line that ends while a style is
//! active is closed with a reset, and the next line starts by re-opening the
//! style that was active.
//!
//! ```rust
//! use gridline::wrap::wrap_cell;
//!
//! let lines = wrap_cell("\x1b[31mfoo bar\x1b[0m", 3);
//! assert_eq!(lines[0].text, "\x1b[31mfoo\x1b[0m");
//! assert_eq!(lines[1].text, "\x1b[31mbar\x1b[0m");
//! ```

use gridline_ansi::{cluster_width, is_control_cluster, segments, Segment, Sgr, SgrState, RESET};
use unicode_segmentation::UnicodeSegmentation;

/// One display line of a wrapped cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedLine {
    /// Line content, escape sequences included.
    pub text: String,
    /// Visible width of `text`.
    pub width: usize,
}

#[derive(Debug)]
enum Piece<'a> {
    Cluster(&'a str, usize),
    Style(Sgr<'a>),
}

#[derive(Debug)]
enum Token<'a> {
    /// Run of spaces and tabs, each one column wide.
    Gap(usize),
    Word { pieces: Vec<Piece<'a>>, width: usize },
}

impl Token<'_> {
    fn width(&self) -> usize {
        match self {
            Token::Gap(width) | Token::Word { width, .. } => *width,
        }
    }
}

fn paragraphs(cell: &str) -> std::str::Split<'_, char> {
    cell.split('\n')
}

/// Splits one paragraph into words and gaps.
///
/// Style sequences attach to the word they touch: to the preceding word when
/// no gap separates them, otherwise they start the next word. Control
/// clusters other than tab are dropped.
fn tokenize(paragraph: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();

    for segment in segments(paragraph) {
        match segment {
            Segment::Style(sgr) => match tokens.last_mut() {
                Some(Token::Word { pieces, .. }) => pieces.push(Piece::Style(sgr)),
                _ => tokens.push(Token::Word {
                    pieces: vec![Piece::Style(sgr)],
                    width: 0,
                }),
            },
            Segment::Text(text) => {
                for cluster in text.graphemes(true) {
                    if cluster == " " || cluster == "\t" {
                        match tokens.last_mut() {
                            Some(Token::Gap(width)) => *width += 1,
                            _ => tokens.push(Token::Gap(1)),
                        }
                    } else if !is_control_cluster(cluster) {
                        let w = cluster_width(cluster);
                        match tokens.last_mut() {
                            Some(Token::Word { pieces, width }) => {
                                pieces.push(Piece::Cluster(cluster, w));
                                *width += w;
                            }
                            _ => tokens.push(Token::Word {
                                pieces: vec![Piece::Cluster(cluster, w)],
                                width: w,
                            }),
                        }
                    }
                }
            }
        }
    }

    tokens
}

/// Visible width of a paragraph laid out on a single line.
fn paragraph_width(tokens: &[Token<'_>]) -> usize {
    let end = match tokens.last() {
        Some(Token::Gap(_)) => tokens.len() - 1,
        _ => tokens.len(),
    };
    tokens[..end].iter().map(Token::width).sum()
}

/// Width a cell needs to show every paragraph on one line.
///
/// Measured exactly as [`wrap_cell`] lays text out: escapes are zero-width,
/// tabs are one column, trailing blanks do not count.
pub fn display_width(cell: &str) -> usize {
    paragraphs(cell)
        .map(|paragraph| paragraph_width(&tokenize(paragraph)))
        .max()
        .unwrap_or(0)
}

/// Accumulates output lines and the style state that flows between them.
struct LineBuilder {
    lines: Vec<WrappedLine>,
    text: String,
    width: usize,
    state: SgrState,
    /// Set while something on the current line may still be styling output.
    open: bool,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            text: String::new(),
            width: 0,
            state: SgrState::default(),
            open: false,
        }
    }

    fn push_style(&mut self, sgr: &Sgr<'_>) {
        self.text.push_str(sgr.raw());
        self.state.apply_sgr(sgr);
        self.open = !(self.state.is_plain() && sgr.ends_in_reset());
    }

    fn push_cluster(&mut self, cluster: &str, width: usize) {
        self.text.push_str(cluster);
        self.width += width;
    }

    fn push_spaces(&mut self, count: usize) {
        self.text.extend(std::iter::repeat_n(' ', count));
        self.width += count;
    }

    /// Appends a word, splitting it between clusters whenever the next one
    /// would overflow `limit`. A cluster wider than `limit` still gets a line
    /// of its own.
    fn push_word(&mut self, pieces: &[Piece<'_>], limit: usize) {
        for piece in pieces {
            match piece {
                Piece::Style(sgr) => self.push_style(sgr),
                Piece::Cluster(cluster, w) => {
                    if *w > 0 && self.width > 0 && self.width + w > limit {
                        self.break_line();
                    }
                    self.push_cluster(cluster, *w);
                }
            }
        }
    }

    fn break_line(&mut self) {
        if self.open {
            self.text.push_str(RESET);
        }
        let text = std::mem::replace(&mut self.text, self.state.escape());
        self.lines.push(WrappedLine {
            text,
            width: self.width,
        });
        self.width = 0;
        self.open = !self.text.is_empty();
    }

    fn finish(mut self) -> Vec<WrappedLine> {
        if self.open {
            self.text.push_str(RESET);
        }
        self.lines.push(WrappedLine {
            text: self.text,
            width: self.width,
        });
        self.lines
    }
}

/// Wraps `cell` into lines no wider than `width` visible columns.
///
/// Always returns at least one line; an empty cell gives one empty line.
pub fn wrap_cell(cell: &str, width: usize) -> Vec<WrappedLine> {
    let limit = width.max(1);
    let mut builder = LineBuilder::new();

    for (index, paragraph) in paragraphs(cell).enumerate() {
        if index > 0 {
            builder.break_line();
        }

        let mut gap = 0;
        for token in tokenize(paragraph) {
            match token {
                Token::Gap(w) => gap = w,
                Token::Word { pieces, width: 0 } => {
                    // Zero-width words never move to a new line.
                    if builder.width + gap <= limit {
                        builder.push_spaces(gap);
                    }
                    builder.push_word(&pieces, limit);
                    gap = 0;
                }
                Token::Word { pieces, width: w } => {
                    if builder.width + gap + w <= limit {
                        builder.push_spaces(gap);
                    } else if builder.width > 0 {
                        builder.break_line();
                    }
                    builder.push_word(&pieces, limit);
                    gap = 0;
                }
            }
        }
    }

    builder.finish()
}
