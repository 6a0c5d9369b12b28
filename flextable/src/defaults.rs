use crate::types::{Border, CellAlign, Color, Decoration, Edges, TableBorder};

/// Checkbox column width used unless [`TableDefaults::checkbox_width`] is changed.
pub const DEFAULT_CHECKBOX_WIDTH: u16 = 40;

/// Fallback values for everything a table leaves unset.
///
/// Like bare HTML defaults: a light header, light grey grid lines, one
/// cell of horizontal padding and vertically centered, left-aligned content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableDefaults {
    pub header_fill: Color,
    pub border: TableBorder,
    pub cell_padding: Edges,
    pub cell_align: CellAlign,
    pub checkbox_width: u16,
    pub checkbox_padding: Edges,
}

impl TableDefaults {
    pub const fn new() -> Self {
        Self {
            header_fill: Color::grey(238),
            border: TableBorder {
                style: Border::Single,
                color: Color::grey(224),
                inside: true,
            },
            cell_padding: Edges::horizontal(1),
            cell_align: CellAlign::CENTER_LEFT,
            checkbox_width: DEFAULT_CHECKBOX_WIDTH,
            checkbox_padding: Edges::ZERO,
        }
    }

    pub fn header_decoration(&self) -> Decoration {
        Decoration::fill(self.header_fill)
    }
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self::new()
    }
}
