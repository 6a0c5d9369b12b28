mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{CellContent, Grid, GridRow};
use crate::render::Renderable;
use crate::width::resolve_widths;

/// Position of a laid-out column or row: start and extent on its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u16,
    pub size: u16,
}

impl Span {
    pub const fn end(&self) -> u16 {
        self.start.saturating_add(self.size)
    }
}

/// Rects of a laid-out grid, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    /// Outer rect of the table, frame included.
    pub bounds: Rect,
    /// Column spans in grid column order.
    pub columns: Vec<Span>,
    /// Row spans for the rows that fit, in grid row order.
    pub rows: Vec<Span>,
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay the grid out inside `area`.
///
/// The frame takes one cell on each side and inner lines one cell each when
/// the border draws them. Column widths come from the grid's width map;
/// each row is as tall as its tallest cell. Rows that start below the
/// area are left out.
pub fn layout<C: Renderable>(grid: &Grid<C>, area: Rect) -> LayoutResult {
    let frame = grid.border.frame_width();
    let line = grid.border.inner_line_width();
    let column_count = u16::try_from(grid.column_count()).unwrap_or(u16::MAX);

    let lines = frame
        .saturating_mul(2)
        .saturating_add(line.saturating_mul(column_count.saturating_sub(1)));
    let widths = resolve_widths(&grid.column_widths, area.width.saturating_sub(lines));

    let mut columns = Vec::with_capacity(widths.len());
    let mut x = area.x.saturating_add(frame);
    for width in &widths {
        columns.push(Span {
            start: x,
            size: *width,
        });
        x = x.saturating_add(*width).saturating_add(line);
    }
    let inner_left = area.x.saturating_add(frame);
    let inner_right = columns.last().map_or(inner_left, Span::end);

    let mut result = LayoutResult::default();
    let limit = area.bottom().saturating_sub(frame);
    let mut y = area.y.saturating_add(frame);

    for row in &grid.rows {
        if y >= limit {
            log::debug!("[layout] {}: {} does not fit, stopping", grid.id, row.id);
            break;
        }
        let height = row_height(row, &widths).min(limit - y);
        let span = Span { start: y, size: height };

        result.rects.insert(
            row.id.clone(),
            Rect::new(inner_left, y, inner_right.saturating_sub(inner_left), height),
        );
        for (cell, column) in row.cells.iter().zip(&columns) {
            result
                .rects
                .insert(cell.id.clone(), Rect::new(column.start, y, column.size, height));
        }

        result.rows.push(span);
        y = span.end().saturating_add(line);
    }

    let content_bottom = result.rows.last().map_or(area.y.saturating_add(frame), Span::end);
    result.bounds = Rect::new(
        area.x,
        area.y,
        inner_right.saturating_add(frame).saturating_sub(area.x),
        content_bottom.saturating_add(frame).saturating_sub(area.y),
    );
    result.rects.insert(grid.id.clone(), result.bounds);
    result.columns = columns;

    result
}

fn row_height<C: Renderable>(row: &GridRow<C>, widths: &[u16]) -> u16 {
    row.cells
        .iter()
        .take(widths.len())
        .map(|cell| {
            let content = match &cell.content {
                CellContent::Content(content) => content.measure().1,
                CellContent::Checkbox(_) => 1,
                CellContent::Empty | CellContent::Placeholder { .. } => 0,
            };
            content.saturating_add(cell.padding.vertical_total())
        })
        .max()
        .unwrap_or(0)
        .max(1)
}
