//! Row and cell data.

/// An ordered list of cells.
///
/// Cells are plain strings that may hold `\n` line breaks and ANSI SGR
/// sequences. A row may be shorter than the table's column count; the missing
/// trailing cells read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// The cell at `index`, or `""` when the row is too short.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.cells.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::new(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for Row {
    fn from(cells: Vec<S>) -> Self {
        Row::new(cells)
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
