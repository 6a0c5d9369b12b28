use crate::element::{Activation, Grid, RowKind};
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// A handler the table called in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A row checkbox asked for `value`.
    Toggled { row: usize, value: bool },
    /// The header checkbox asked for `value`.
    SelectAll { value: bool },
    /// A data cell of `row` was tapped.
    Tapped { row: usize },
}

/// Deliver a click at (x, y) to whatever cell is there.
///
/// The matching handler runs once, synchronously, before this returns.
/// Returns None when the click hit nothing interactive.
pub fn dispatch_click<C>(
    grid: &Grid<C>,
    layout: &LayoutResult,
    x: u16,
    y: u16,
) -> Option<Interaction> {
    let hit = hit_test(grid, layout, x, y)?;
    let activation = hit.cell.activate();

    let interaction = match (hit.row.kind, activation?) {
        (RowKind::Header, Activation::Toggled(value)) => Interaction::SelectAll { value },
        (RowKind::Data(row), Activation::Toggled(value)) => Interaction::Toggled { row, value },
        (RowKind::Data(row), Activation::Tapped) => Interaction::Tapped { row },
        (RowKind::Header, Activation::Tapped) => return None,
    };

    log::trace!("[event] click at ({x}, {y}) on {}: {interaction:?}", hit.cell.id);
    Some(interaction)
}
