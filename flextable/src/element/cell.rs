use std::fmt;

use crate::row::{SelectHandler, TapHandler};
use crate::types::{CellAlign, Edges};

/// Checkbox value. `Mixed` is only shown by tri-state checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Mixed,
}

impl CheckState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    /// The value requested by clicking: checked becomes unchecked,
    /// anything else becomes checked.
    pub fn toggled(self) -> bool {
        !self.is_checked()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Unchecked => "[ ]",
            Self::Mixed => "[-]",
        }
    }
}

/// An interactive checkbox that reports toggles without storing them.
#[derive(Clone)]
pub struct Checkbox {
    pub state: CheckState,
    pub tristate: bool,
    on_change: Option<SelectHandler>,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self {
            state: CheckState::from_bool(checked),
            tristate: false,
            on_change: None,
        }
    }

    pub fn tristate(mut self, tristate: bool) -> Self {
        self.tristate = tristate;
        self
    }

    pub fn on_change(mut self, handler: Option<SelectHandler>) -> Self {
        self.on_change = handler;
        self
    }

    /// A checkbox without a handler is drawn but ignores clicks.
    pub fn is_enabled(&self) -> bool {
        self.on_change.is_some()
    }

    /// Call the change handler once with the toggled value.
    ///
    /// `state` is left as is; the caller rebuilds with the new value.
    /// Returns the value passed to the handler, or `None` when disabled.
    pub fn toggle(&self) -> Option<bool> {
        let handler = self.on_change.as_ref()?;
        let value = self.state.toggled();
        handler(value);
        Some(value)
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("state", &self.state)
            .field("tristate", &self.tristate)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum CellContent<C> {
    /// Nothing to draw. Fills positions a short row did not supply.
    Empty,
    /// Reserved space that keeps the header aligned with checkbox rows.
    Placeholder { width: u16 },
    Checkbox(Checkbox),
    Content(C),
}

impl<C> CellContent<C> {
    pub fn as_content(&self) -> Option<&C> {
        match self {
            Self::Content(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&Checkbox> {
        match self {
            Self::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }
}

/// What happened when a cell was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Toggled(bool),
    Tapped,
}

#[derive(Clone)]
pub struct GridCell<C> {
    pub id: String,
    pub content: CellContent<C>,
    pub padding: Edges,
    pub align: CellAlign,
    pub on_tap: Option<TapHandler>,
    /// Hover, focus and splash highlighting. Off for table cells so row
    /// decorations are never painted over.
    pub tap_feedback: bool,
}

impl<C> GridCell<C> {
    pub fn new(id: impl Into<String>, content: CellContent<C>) -> Self {
        Self {
            id: id.into(),
            content,
            padding: Edges::ZERO,
            align: CellAlign::default(),
            on_tap: None,
            tap_feedback: false,
        }
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    pub fn on_tap(mut self, handler: Option<TapHandler>) -> Self {
        self.on_tap = handler;
        self
    }

    pub fn is_interactive(&self) -> bool {
        match &self.content {
            CellContent::Checkbox(checkbox) => checkbox.is_enabled(),
            _ => self.on_tap.is_some(),
        }
    }

    /// Run the cell's handler, as a click or an Enter key would.
    ///
    /// Checkboxes toggle; other cells call their tap handler.
    pub fn activate(&self) -> Option<Activation> {
        match &self.content {
            CellContent::Checkbox(checkbox) => checkbox.toggle().map(Activation::Toggled),
            _ => {
                let on_tap = self.on_tap.as_ref()?;
                on_tap();
                Some(Activation::Tapped)
            }
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for GridCell<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCell")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("padding", &self.padding)
            .field("align", &self.align)
            .field("on_tap", &self.on_tap.is_some())
            .field("tap_feedback", &self.tap_feedback)
            .finish()
    }
}
