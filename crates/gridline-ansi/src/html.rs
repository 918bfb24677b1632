//! ANSI to HTML conversion.
//!
//! The converter keeps an explicit stack of open HTML tags. SGR sequences only
//! update the *desired* [`SgrState`]; the stack is reconciled with it right
//! before each run of visible text, so styles that never cover text produce no
//! markup at all.
//!
//! | Attribute | Tag |
//! |-----------|-----|
//! | bold | `<b>` |
//! | italic | `<i>` |
//! | underline | `<u>` |
//! | strikethrough | `<s>` |
//! | colors | `<span style="color:..;background-color:..">` |

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::parser::{segments, Segment};
use crate::style::SgrState;

/// Output options for [`Converter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Wrap the fragment in a `<pre>` element.
    pub container: bool,
    /// Class attribute for the container. Ignored without `container`.
    pub class: Option<String>,
}

impl HtmlOptions {
    /// Options that wrap the output in `<pre>`.
    pub fn container() -> Self {
        Self {
            container: true,
            class: None,
        }
    }

    /// Sets the container class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl From<bool> for HtmlOptions {
    fn from(container: bool) -> Self {
        Self {
            container,
            class: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Colors {
        foreground: Option<Color>,
        background: Option<Color>,
    },
}

impl Tag {
    /// True while the desired state still wants this exact tag open.
    fn holds(&self, state: &SgrState) -> bool {
        match *self {
            Tag::Bold => state.bold,
            Tag::Italic => state.italic,
            Tag::Underline => state.underline,
            Tag::Strikethrough => state.strikethrough,
            Tag::Colors {
                foreground,
                background,
            } => state.foreground == foreground && state.background == background,
        }
    }

    fn open(&self, out: &mut String) {
        match *self {
            Tag::Bold => out.push_str("<b>"),
            Tag::Italic => out.push_str("<i>"),
            Tag::Underline => out.push_str("<u>"),
            Tag::Strikethrough => out.push_str("<s>"),
            Tag::Colors {
                foreground,
                background,
            } => {
                let mut rules = Vec::with_capacity(2);
                if let Some(color) = foreground {
                    rules.push(format!("color:{}", color.css()));
                }
                if let Some(color) = background {
                    rules.push(format!("background-color:{}", color.css()));
                }
                out.push_str("<span style=\"");
                out.push_str(&rules.join(";"));
                out.push_str("\">");
            }
        }
    }

    fn close(&self, out: &mut String) {
        out.push_str(match self {
            Tag::Bold => "</b>",
            Tag::Italic => "</i>",
            Tag::Underline => "</u>",
            Tag::Strikethrough => "</s>",
            Tag::Colors { .. } => "</span>",
        });
    }
}

/// Tags wanted by `state`, in canonical nesting order.
fn wanted(state: &SgrState) -> impl Iterator<Item = Tag> {
    let colors = (state.foreground.is_some() || state.background.is_some()).then_some(
        Tag::Colors {
            foreground: state.foreground,
            background: state.background,
        },
    );

    [
        state.bold.then_some(Tag::Bold),
        state.italic.then_some(Tag::Italic),
        state.underline.then_some(Tag::Underline),
        state.strikethrough.then_some(Tag::Strikethrough),
        colors,
    ]
    .into_iter()
    .flatten()
}

/// Brings the open-tag stack in line with `state`.
///
/// Everything from the first stale tag upward is closed in reverse order,
/// then missing tags are opened.
fn reconcile(out: &mut String, stack: &mut Vec<Tag>, state: &SgrState) {
    let keep = stack
        .iter()
        .position(|tag| !tag.holds(state))
        .unwrap_or(stack.len());

    while stack.len() > keep {
        if let Some(tag) = stack.pop() {
            tag.close(out);
        }
    }

    for tag in wanted(state) {
        if !stack.contains(&tag) {
            tag.open(out);
            stack.push(tag);
        }
    }
}

/// Appends `text` with HTML special characters escaped.
pub fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Converts ANSI-styled text to HTML with a fixed set of [`HtmlOptions`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: HtmlOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: impl Into<HtmlOptions>) -> Self {
        Self {
            options: options.into(),
        }
    }

    /// Options this converter was built with.
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Converts `input`, returning the HTML fragment (or container element).
    pub fn convert(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 32);

        if self.options.container {
            match &self.options.class {
                Some(class) => {
                    out.push_str("<pre class=\"");
                    escape_html_into(&mut out, class);
                    out.push_str("\">");
                }
                None => out.push_str("<pre>"),
            }
        }

        self.convert_into(&mut out, input);

        if self.options.container {
            out.push_str("</pre>");
        }
        out
    }

    /// Appends the bare fragment for `input` to `out`, ignoring the container.
    pub fn convert_into(&self, out: &mut String, input: &str) {
        let mut stack: Vec<Tag> = Vec::new();
        let mut desired = SgrState::default();

        for segment in segments(input) {
            match segment {
                Segment::Style(sgr) => desired.apply_sgr(&sgr),
                Segment::Text(text) => {
                    reconcile(out, &mut stack, &desired);
                    escape_html_into(out, text);
                }
            }
        }

        while let Some(tag) = stack.pop() {
            tag.close(out);
        }
    }
}

/// Converts ANSI-styled text to an HTML fragment.
///
/// ```rust
/// use gridline_ansi::convert_ansi_to_html;
///
/// assert_eq!(
///     convert_ansi_to_html("\x1b[1mbold\x1b[0m & plain"),
///     "<b>bold</b> &amp; plain"
/// );
/// ```
pub fn convert_ansi_to_html(input: &str) -> String {
    Converter::default().convert(input)
}

/// Converts ANSI-styled text to HTML, optionally inside a `<pre>` container.
///
/// `options` accepts an [`HtmlOptions`] or a plain `bool` for the container flag.
pub fn convert_ansi_to_html_with_options(input: &str, options: impl Into<HtmlOptions>) -> String {
    Converter::new(options).convert(input)
}
