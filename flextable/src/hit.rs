use crate::element::{Grid, GridCell, GridRow};
use crate::layout::LayoutResult;

/// The cell under a point.
#[derive(Debug)]
pub struct Hit<'a, C> {
    pub row: &'a GridRow<C>,
    pub cell: &'a GridCell<C>,
    /// Grid column index, checkbox column included.
    pub column: usize,
}

/// Find the cell containing (x, y), or None when the point is on a grid
/// line or outside the table.
pub fn hit_test<'a, C>(
    grid: &'a Grid<C>,
    layout: &LayoutResult,
    x: u16,
    y: u16,
) -> Option<Hit<'a, C>> {
    if !layout.bounds.contains(x, y) {
        return None;
    }

    let row = grid
        .rows
        .iter()
        .find(|row| layout.get(&row.id).is_some_and(|rect| rect.contains(x, y)))?;

    row.cells
        .iter()
        .enumerate()
        .find(|(_, cell)| layout.get(&cell.id).is_some_and(|rect| rect.contains(x, y)))
        .map(|(column, cell)| Hit { row, cell, column })
}
