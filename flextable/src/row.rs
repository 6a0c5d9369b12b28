//! Row definitions.

use std::fmt;
use std::sync::Arc;

use crate::types::Decoration;

/// Called when a data cell of the row is tapped.
pub type TapHandler = Arc<dyn Fn() + Send + Sync>;

/// Called with the requested selection state when a checkbox is toggled.
pub type SelectHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// One data row: its cells in column order, decoration and callbacks.
///
/// The row does not own selection state. `selected` is only what the
/// checkbox shows; the caller rebuilds the row after `on_select` fires.
#[derive(Clone)]
pub struct RowSpec<C> {
    pub cells: Vec<C>,
    pub decoration: Option<Decoration>,
    pub on_tap: Option<TapHandler>,
    pub selected: bool,
    pub on_select: Option<SelectHandler>,
}

impl<C> RowSpec<C> {
    pub fn new(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            decoration: None,
            on_tap: None,
            selected: false,
            on_select: None,
        }
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    pub fn on_tap(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(handler));
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }
}

impl<C: fmt::Debug> fmt::Debug for RowSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSpec")
            .field("cells", &self.cells)
            .field("decoration", &self.decoration)
            .field("on_tap", &self.on_tap.is_some())
            .field("selected", &self.selected)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
