//! Drawing a laid-out grid into a [`Buffer`].

use crate::buffer::Buffer;
use crate::element::{CellContent, Grid, GridCell, GridRow};
use crate::layout::{LayoutResult, Rect, Span};
use crate::text::{char_width, measure, truncate_to_width};
use crate::types::{Border, Decoration, Rgb, TextStyle};

/// Foreground and text style a cell inherits from its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Rgb,
    pub style: TextStyle,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            style: TextStyle::new(),
        }
    }
}

/// Cell content the table can measure and draw.
///
/// The table never looks inside content; it only asks for its size and
/// gives it a rect.
pub trait Renderable {
    /// Natural (width, height) in cells.
    fn measure(&self) -> (u16, u16);

    /// Draw inside `area`. The area is already clipped to the cell.
    fn render(&self, area: Rect, paint: Paint, buf: &mut Buffer);
}

impl Renderable for str {
    fn measure(&self) -> (u16, u16) {
        measure(self)
    }

    fn render(&self, area: Rect, paint: Paint, buf: &mut Buffer) {
        render_text(self, area, paint, buf);
    }
}

impl Renderable for String {
    fn measure(&self) -> (u16, u16) {
        self.as_str().measure()
    }

    fn render(&self, area: Rect, paint: Paint, buf: &mut Buffer) {
        self.as_str().render(area, paint, buf);
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn measure(&self) -> (u16, u16) {
        (**self).measure()
    }

    fn render(&self, area: Rect, paint: Paint, buf: &mut Buffer) {
        (**self).render(area, paint, buf);
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self) -> (u16, u16) {
        (**self).measure()
    }

    fn render(&self, area: Rect, paint: Paint, buf: &mut Buffer) {
        (**self).render(area, paint, buf);
    }
}

/// Draw `grid` using the rects from [`layout`](crate::layout::layout).
pub fn render_to_buffer<C: Renderable>(grid: &Grid<C>, layout: &LayoutResult, buf: &mut Buffer) {
    for row in &grid.rows {
        render_row(row, layout, buf);
    }
    render_lines(grid, layout, buf);
}

fn render_row<C: Renderable>(row: &GridRow<C>, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&row.id) else {
        return;
    };

    let decoration = row.decoration.unwrap_or_default();
    if let Some(bg) = decoration.background {
        buf.fill_bg(*rect, bg.to_rgb());
    }

    let paint = row_paint(&decoration);
    for cell in &row.cells {
        if let Some(cell_rect) = layout.get(&cell.id) {
            render_cell(cell, *cell_rect, paint, buf);
        }
    }
}

fn row_paint(decoration: &Decoration) -> Paint {
    let fg = match (decoration.foreground, decoration.background) {
        (Some(fg), _) => fg.to_rgb(),
        (None, Some(bg)) => bg.to_rgb().contrasting(),
        (None, None) => Rgb::WHITE,
    };
    Paint {
        fg,
        style: decoration.text_style,
    }
}

fn render_cell<C: Renderable>(cell: &GridCell<C>, rect: Rect, paint: Paint, buf: &mut Buffer) {
    let inner = rect.shrink(cell.padding);
    if inner.is_empty() {
        return;
    }

    match &cell.content {
        CellContent::Empty | CellContent::Placeholder { .. } => {}
        CellContent::Checkbox(checkbox) => {
            place(checkbox.state.glyph(), inner, cell, paint, buf);
        }
        CellContent::Content(content) => place(content, inner, cell, paint, buf),
    }
}

fn place<R: Renderable + ?Sized, C>(
    content: &R,
    inner: Rect,
    cell: &GridCell<C>,
    paint: Paint,
    buf: &mut Buffer,
) {
    let (w, h) = content.measure();
    let (w, h) = (w.min(inner.width), h.min(inner.height));
    let (dx, dy) = cell.align.offset(inner.width, inner.height, w, h);
    content.render(Rect::new(inner.x + dx, inner.y + dy, w, h), paint, buf);
}

fn render_text(text: &str, area: Rect, paint: Paint, buf: &mut Buffer) {
    for (line, y) in text.lines().zip(area.y..area.bottom()) {
        let mut x = area.x;
        for ch in truncate_to_width(line, usize::from(area.width)).chars() {
            let width = u16::try_from(char_width(ch)).unwrap_or(1);
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > area.right() {
                break;
            }
            buf.put(x, y, ch, paint.fg, paint.style);
            if width == 2 {
                if let Some(next) = buf.get_mut(x + 1, y) {
                    next.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}

struct LineGlyphs {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    tee_down: char,
    tee_up: char,
    tee_right: char,
    tee_left: char,
    cross: char,
}

fn glyphs(border: Border) -> Option<LineGlyphs> {
    let (horizontal, vertical, corners, tees) = match border {
        Border::None => return None,
        Border::Single => ('─', '│', ['┌', '┐', '└', '┘'], ['┬', '┴', '├', '┤', '┼']),
        Border::Rounded => ('─', '│', ['╭', '╮', '╰', '╯'], ['┬', '┴', '├', '┤', '┼']),
        Border::Double => ('═', '║', ['╔', '╗', '╚', '╝'], ['╦', '╩', '╠', '╣', '╬']),
        Border::Thick => ('━', '┃', ['┏', '┓', '┗', '┛'], ['┳', '┻', '┣', '┫', '╋']),
    };
    let [top_left, top_right, bottom_left, bottom_right] = corners;
    let [tee_down, tee_up, tee_right, tee_left, cross] = tees;
    Some(LineGlyphs {
        horizontal,
        vertical,
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        tee_down,
        tee_up,
        tee_right,
        tee_left,
        cross,
    })
}

/// Positions of the lines along one axis: frame edges plus inner separators.
fn line_positions(spans: &[Span], frame: Rect, vertical: bool, inside: bool) -> Vec<u16> {
    let (first, last) = if vertical {
        (frame.x, frame.right().saturating_sub(1))
    } else {
        (frame.y, frame.bottom().saturating_sub(1))
    };

    let mut positions = vec![first];
    if inside {
        positions.extend(
            spans
                .iter()
                .take(spans.len().saturating_sub(1))
                .map(Span::end),
        );
    }
    if last > first {
        positions.push(last);
    }
    positions
}

fn render_lines<C>(grid: &Grid<C>, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(g) = glyphs(grid.border.style) else {
        return;
    };
    let frame = layout.bounds;
    if frame.width < 2 || frame.height < 2 {
        return;
    }

    let color = grid.border.color.to_rgb();
    let xs = line_positions(&layout.columns, frame, true, grid.border.inside);
    let ys = line_positions(&layout.rows, frame, false, grid.border.inside);
    let style = TextStyle::new();

    for &y in &ys {
        for x in frame.x..frame.right() {
            buf.put(x, y, g.horizontal, color, style);
        }
    }
    for &x in &xs {
        for y in frame.y..frame.bottom() {
            buf.put(x, y, g.vertical, color, style);
        }
    }

    let (last_x, last_y) = (xs.len() - 1, ys.len() - 1);
    for (j, &y) in ys.iter().enumerate() {
        for (i, &x) in xs.iter().enumerate() {
            let glyph = match (i == 0, i == last_x, j == 0, j == last_y) {
                (true, _, true, _) => g.top_left,
                (_, true, true, _) => g.top_right,
                (true, _, _, true) => g.bottom_left,
                (_, true, _, true) => g.bottom_right,
                (_, _, true, _) => g.tee_down,
                (_, _, _, true) => g.tee_up,
                (true, _, _, _) => g.tee_right,
                (_, true, _, _) => g.tee_left,
                _ => g.cross,
            };
            buf.put(x, y, glyph, color, style);
        }
    }

    // A row's border color paints the line below it.
    for (row, span) in grid.rows.iter().zip(&layout.rows) {
        let Some(border) = row.decoration.and_then(|d| d.border) else {
            continue;
        };
        let y = span.end();
        if !ys.contains(&y) {
            continue;
        }
        let rgb = border.to_rgb();
        for x in frame.x..frame.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.fg = rgb;
            }
        }
    }
}
