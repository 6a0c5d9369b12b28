#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Where content sits inside its cell once padding is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellAlign {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl CellAlign {
    pub const TOP_LEFT: CellAlign = CellAlign::new(HAlign::Left, VAlign::Top);
    pub const CENTER_LEFT: CellAlign = CellAlign::new(HAlign::Left, VAlign::Middle);
    pub const CENTER: CellAlign = CellAlign::new(HAlign::Center, VAlign::Middle);
    pub const CENTER_RIGHT: CellAlign = CellAlign::new(HAlign::Right, VAlign::Middle);

    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Offset of a `width` x `height` box placed inside a `space_w` x `space_h` area.
    pub fn offset(&self, space_w: u16, space_h: u16, width: u16, height: u16) -> (u16, u16) {
        let free_w = space_w.saturating_sub(width);
        let free_h = space_h.saturating_sub(height);

        let dx = match self.horizontal {
            HAlign::Left => 0,
            HAlign::Center => free_w / 2,
            HAlign::Right => free_w,
        };
        let dy = match self.vertical {
            VAlign::Top => 0,
            VAlign::Middle => free_h / 2,
            VAlign::Bottom => free_h,
        };

        (dx, dy)
    }
}

/// Line style for grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    None,
    #[default]
    Single,
    Double,
    Rounded,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
