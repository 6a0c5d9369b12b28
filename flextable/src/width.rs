//! Column width units and their resolution into cell widths.

use std::collections::BTreeMap;

use crate::column::ColumnSpec;

/// Width unit of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exact width in cells.
    Fixed(u16),
    /// Share of whatever is left after fixed columns.
    Flex(u16),
}

/// Map grid column index to width unit.
///
/// With `checkbox_width` set, index 0 is the fixed checkbox column and the
/// data columns follow at `i + 1`.
pub fn column_widths<C>(
    columns: &[ColumnSpec<C>],
    checkbox_width: Option<u16>,
) -> BTreeMap<usize, ColumnWidth> {
    let mut widths = BTreeMap::new();
    let offset = match checkbox_width {
        Some(width) => {
            widths.insert(0, ColumnWidth::Fixed(width));
            1
        }
        None => 0,
    };

    for (i, column) in columns.iter().enumerate() {
        widths.insert(i + offset, ColumnWidth::Flex(column.flex.max(1)));
    }

    widths
}

/// Turn width units into concrete widths that fit in `available` cells.
///
/// Fixed columns are served first, in index order, and clamped to what is
/// left. The remainder is split between flex columns proportionally to
/// their weights; rounding leftovers go one cell at a time to the leftmost
/// flex columns, so the result fills `available` whenever a flex column
/// exists.
pub fn resolve_widths(widths: &BTreeMap<usize, ColumnWidth>, available: u16) -> Vec<u16> {
    let mut remaining = available;
    let mut resolved: Vec<u16> = widths
        .values()
        .map(|unit| match *unit {
            ColumnWidth::Fixed(n) => {
                let n = n.min(remaining);
                remaining -= n;
                n
            }
            ColumnWidth::Flex(_) => 0,
        })
        .collect();

    let total_weight: u32 = widths
        .values()
        .filter_map(|unit| match *unit {
            ColumnWidth::Flex(w) => Some(u32::from(w.max(1))),
            ColumnWidth::Fixed(_) => None,
        })
        .sum();
    if total_weight == 0 {
        return resolved;
    }

    let mut handed_out = 0u16;
    for (slot, unit) in resolved.iter_mut().zip(widths.values()) {
        if let ColumnWidth::Flex(w) = *unit {
            let share = u32::from(remaining) * u32::from(w.max(1)) / total_weight;
            // share <= remaining, which fits in u16
            *slot = u16::try_from(share).unwrap_or(remaining);
            handed_out += *slot;
        }
    }

    let mut leftover = remaining.saturating_sub(handed_out);
    for (slot, unit) in resolved.iter_mut().zip(widths.values()) {
        if leftover == 0 {
            break;
        }
        if matches!(unit, ColumnWidth::Flex(_)) {
            *slot += 1;
            leftover -= 1;
        }
    }

    resolved
}
