//! Width resolution for table columns.
//!
//! Columns start from their *natural* width, the widest visible line any of
//! their cells holds. When a total width is set and the natural layout does not
//! fit, the space left after borders and padding is shared out in proportion
//! to the natural widths.

use log::debug;

use crate::cell::Row;
use crate::wrap::display_width;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without decorations).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Widest visible line per column over all `rows`.
///
/// Cells beyond `columns` are ignored; missing cells count as empty.
pub fn natural_widths<'a, I>(rows: I, columns: usize) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut widths = vec![0; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths
}

/// Resolves final column widths.
///
/// * `natural` - natural width of each column
/// * `overhead` - columns used by borders and padding
/// * `max_width` - total width budget, `None` for unconstrained
///
/// Every column gets at least one unit, so the result can exceed a budget
/// smaller than `overhead + natural.len()`.
///
/// # Example
///
/// ```rust
/// use gridline::resolve::resolve_widths;
///
/// // Fits: natural widths are kept.
/// assert_eq!(resolve_widths(&[4, 6], 7, Some(40)).widths, vec![4, 6]);
///
/// // Too wide: 20 - 7 = 13 columns shared out 30:10.
/// assert_eq!(resolve_widths(&[30, 10], 7, Some(20)).widths, vec![10, 3]);
/// ```
pub fn resolve_widths(
    natural: &[usize],
    overhead: usize,
    max_width: Option<usize>,
) -> ResolvedWidths {
    let floored: Vec<usize> = natural.iter().map(|&w| w.max(1)).collect();

    let Some(max_width) = max_width else {
        return ResolvedWidths { widths: floored };
    };

    if floored.iter().sum::<usize>() + overhead <= max_width {
        return ResolvedWidths { widths: floored };
    }

    let available = max_width.saturating_sub(overhead);
    debug!(
        "arranging {} columns into {} (natural {:?}, overhead {})",
        natural.len(),
        available,
        natural,
        overhead
    );

    let widths = arrange(natural, available);
    ResolvedWidths { widths }
}

/// Proportional split of `available` with largest-remainder rounding, then a
/// floor of one per column.
fn arrange(natural: &[usize], available: usize) -> Vec<usize> {
    let total: usize = natural.iter().sum();
    if total == 0 {
        return vec![1; natural.len()];
    }

    let mut widths = Vec::with_capacity(natural.len());
    let mut remainders = Vec::with_capacity(natural.len());
    for &n in natural {
        let share = n as u128 * available as u128;
        widths.push((share / total as u128) as usize);
        remainders.push(share % total as u128);
    }

    // Fewer than `natural.len()` units are left after flooring.
    let leftover = available.saturating_sub(widths.iter().sum());
    let mut order: Vec<usize> = (0..natural.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    for &index in order.iter().take(leftover) {
        widths[index] += 1;
    }

    for width in widths.iter_mut() {
        *width = (*width).max(1);
    }

    let mut sum: usize = widths.iter().sum();
    while sum > available {
        let Some(widest) = widest_shrinkable(&widths) else {
            break;
        };
        widths[widest] -= 1;
        sum -= 1;
    }

    widths
}

/// Leftmost column among the widest ones that can still give up a unit.
fn widest_shrinkable(widths: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &width) in widths.iter().enumerate() {
        if width > 1 && best.map_or(true, |b| width > widths[b]) {
            best = Some(index);
        }
    }
    best
}
