use super::{Border, Color, TextStyle};

/// Visual style for a row container (header or data row).
///
/// Applied to the whole row, never to individual cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Decoration {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    /// Color of the grid line directly below the row.
    pub border: Option<Color>,
    /// Corner rounding. Carried for hosts that can draw it; the cell
    /// renderer has no sub-cell geometry and ignores it.
    pub radius: u16,
    pub text_style: TextStyle,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoration with only a fill color.
    pub fn fill(color: Color) -> Self {
        Self::new().background(color)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn radius(mut self, radius: u16) -> Self {
        self.radius = radius;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }
}

/// Grid lines of the whole table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBorder {
    pub style: Border,
    pub color: Color,
    /// Draw lines between rows and between columns, not only the frame.
    pub inside: bool,
}

impl TableBorder {
    /// Frame plus every inner line.
    pub const fn all(color: Color) -> Self {
        Self {
            style: Border::Single,
            color,
            inside: true,
        }
    }

    /// Frame only.
    pub const fn outline(color: Color) -> Self {
        Self {
            style: Border::Single,
            color,
            inside: false,
        }
    }

    pub const fn none() -> Self {
        Self {
            style: Border::None,
            color: Color::BLACK,
            inside: false,
        }
    }

    pub const fn style(mut self, style: Border) -> Self {
        self.style = style;
        self
    }

    pub const fn is_visible(&self) -> bool {
        !matches!(self.style, Border::None)
    }

    /// Cells taken by the frame on each side.
    pub const fn frame_width(&self) -> u16 {
        if self.is_visible() {
            1
        } else {
            0
        }
    }

    /// Cells taken by each line between rows or columns.
    pub const fn inner_line_width(&self) -> u16 {
        if self.is_visible() && self.inside {
            1
        } else {
            0
        }
    }
}
