//! Table layout and rendering.
//!
//! [`Layout`] holds everything needed to draw a table: resolved column widths
//! and every cell already wrapped. Both the text output and the line count are
//! derived from it, so they always agree.

use std::fmt;

use gridline_ansi::Converter;
use log::debug;

use crate::border::{BorderPreset, BorderStyle, CELL_PADDING};
use crate::cell::Row;
use crate::resolve::{natural_widths, resolve_widths, ResolvedWidths};
use crate::wrap::{wrap_cell, WrappedLine};

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Header,
    Middle,
    Bottom,
}

/// One row with every cell wrapped to its column width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Wrapped lines per cell, one entry per column.
    pub cells: Vec<Vec<WrappedLine>>,
    /// Lines taken by the tallest cell.
    pub height: usize,
}

impl RowLayout {
    fn new(row: &Row, widths: &ResolvedWidths) -> Self {
        let cells: Vec<Vec<WrappedLine>> = widths
            .widths
            .iter()
            .enumerate()
            .map(|(index, &width)| wrap_cell(row.cell(index), width))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        Self { cells, height }
    }
}

/// A fully resolved table, ready to be drawn.
#[derive(Clone, Debug)]
pub struct Layout {
    style: &'static BorderStyle,
    widths: ResolvedWidths,
    header: Option<RowLayout>,
    rows: Vec<RowLayout>,
}

impl Layout {
    /// Lays out `header` and `rows` with the given preset and width budget.
    ///
    /// At least one column is laid out, even for an empty table.
    pub fn compute(
        header: Option<&Row>,
        rows: &[Row],
        preset: BorderPreset,
        max_width: Option<usize>,
    ) -> Self {
        let style = preset.style();
        let columns = header
            .iter()
            .copied()
            .chain(rows)
            .map(Row::len)
            .max()
            .unwrap_or(0)
            .max(1);

        let natural = natural_widths(header.into_iter().chain(rows), columns);
        let widths = resolve_widths(&natural, style.overhead(columns), max_width);
        debug!(
            "layout {} x {} with {} borders, widths {:?}",
            rows.len(),
            columns,
            preset,
            widths.widths
        );

        let header = header.map(|row| RowLayout::new(row, &widths));
        let rows = rows.iter().map(|row| RowLayout::new(row, &widths)).collect();

        Self {
            style,
            widths,
            header,
            rows,
        }
    }

    pub fn widths(&self) -> &ResolvedWidths {
        &self.widths
    }

    pub fn header(&self) -> Option<&RowLayout> {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[RowLayout] {
        &self.rows
    }

    /// Number of output lines, counted without drawing anything.
    pub fn height(&self) -> usize {
        let style = self.style;
        let mut height = 0;

        if style.outer_horizontal {
            height += 1;
        }
        if let Some(header) = &self.header {
            height += header.height;
            if style.header_separator {
                height += 1;
            }
        }
        height += self.rows.iter().map(|row| row.height).sum::<usize>();
        if style.inner_horizontal {
            height += self.rows.len().saturating_sub(1);
        }
        if style.outer_horizontal {
            height += 1;
        }

        height.max(1)
    }

    /// Visible width of every output line.
    pub fn line_width(&self) -> usize {
        let columns = self.widths.len();
        self.widths.total() + self.style.overhead(columns)
    }

    /// Draws the table, one string per output line.
    pub fn lines(&self) -> Vec<String> {
        let style = self.style;
        let mut output = Vec::with_capacity(self.height());

        if style.outer_horizontal {
            output.push(self.horizontal_line(LineType::Top));
        }

        if let Some(header) = &self.header {
            self.push_row(&mut output, header);
            if style.header_separator {
                output.push(self.horizontal_line(LineType::Header));
            }
        }

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 && style.inner_horizontal {
                output.push(self.horizontal_line(LineType::Middle));
            }
            self.push_row(&mut output, row);
        }

        if style.outer_horizontal {
            output.push(self.horizontal_line(LineType::Bottom));
        }

        if output.is_empty() {
            let blank = RowLayout {
                cells: Vec::new(),
                height: 1,
            };
            output.push(self.content_line(&blank, 0));
        }

        output
    }

    fn push_row(&self, output: &mut Vec<String>, row: &RowLayout) {
        for line in 0..row.height {
            output.push(self.content_line(row, line));
        }
    }

    /// Line `index` of `row`, padded and framed. Cells with fewer lines are
    /// blank below their content.
    fn content_line(&self, row: &RowLayout, index: usize) -> String {
        let style = self.style;
        let mut line = String::with_capacity(self.line_width() * 2);

        if style.outer_vertical {
            line.push(style.vertical);
        }

        for (col, &width) in self.widths.widths.iter().enumerate() {
            if col > 0 && style.inner_vertical {
                line.push(style.vertical);
            }

            let wrapped = row.cells.get(col).and_then(|cell| cell.get(index));
            let (text, used) = wrapped.map_or(("", 0), |l| (l.text.as_str(), l.width));

            push_repeated(&mut line, ' ', CELL_PADDING);
            line.push_str(text);
            push_repeated(&mut line, ' ', width.saturating_sub(used) + CELL_PADDING);
        }

        if style.outer_vertical {
            line.push(style.vertical);
        }

        line
    }

    /// Generate a horizontal line spanning exactly one content line.
    fn horizontal_line(&self, line_type: LineType) -> String {
        let style = self.style;

        let (left, fill, joint, right) = match line_type {
            LineType::Top => (
                style.top_left,
                style.horizontal,
                style.top_joint,
                style.top_right,
            ),
            LineType::Header => (
                style.header_left,
                style.header_horizontal,
                style.header_cross,
                style.header_right,
            ),
            LineType::Middle => (
                style.left_joint,
                style.horizontal,
                style.cross,
                style.right_joint,
            ),
            LineType::Bottom => (
                style.bottom_left,
                style.horizontal,
                style.bottom_joint,
                style.bottom_right,
            ),
        };

        let mut line = String::with_capacity(self.line_width() * 3);
        if style.outer_vertical {
            line.push(left);
        }
        for (col, &width) in self.widths.widths.iter().enumerate() {
            if col > 0 && style.inner_vertical {
                line.push(joint);
            }
            push_repeated(&mut line, fill, width + 2 * CELL_PADDING);
        }
        if style.outer_vertical {
            line.push(right);
        }

        line
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn push_repeated(line: &mut String, c: char, count: usize) {
    line.extend(std::iter::repeat_n(c, count));
}

/// Renders the table as an HTML `<table>`.
///
/// Cells keep their explicit line breaks as `<br>`; width-based wrapping is
/// left to the browser. Short rows are padded with empty cells.
pub fn render_html(header: Option<&Row>, rows: &[Row], preset: BorderPreset) -> String {
    let columns = header
        .iter()
        .copied()
        .chain(rows)
        .map(Row::len)
        .max()
        .unwrap_or(0);
    let converter = Converter::default();

    let mut html = format!("<table class=\"gridline gridline-{}\">\n", preset);

    if let Some(header) = header {
        html.push_str("<thead>\n");
        push_html_row(&mut html, &converter, header, columns, "th");
        html.push_str("</thead>\n");
    }

    html.push_str("<tbody>\n");
    for row in rows {
        push_html_row(&mut html, &converter, row, columns, "td");
    }
    html.push_str("</tbody>\n</table>");

    html
}

fn push_html_row(
    html: &mut String,
    converter: &Converter,
    row: &Row,
    columns: usize,
    tag: &str,
) {
    html.push_str("<tr>");
    for index in 0..columns {
        let cell = converter.convert(row.cell(index));
        html.push('<');
        html.push_str(tag);
        html.push('>');
        html.push_str(&cell.replace('\r', "").replace('\n', "<br>"));
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    html.push_str("</tr>\n");
}
