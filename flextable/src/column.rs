//! Column definitions.

use crate::types::{CellAlign, Edges};

/// A table column: its header content, flex weight and optional cell
/// formatting overrides.
///
/// Padding and alignment apply to the header cell and to every data cell
/// in the column. When unset, the table-level values are used.
///
/// # Example
///
/// ```
/// use flextable::{CellAlign, ColumnSpec};
///
/// let name = ColumnSpec::new("Name").flex(2);
/// let size = ColumnSpec::new("Size").align(CellAlign::CENTER_RIGHT);
/// assert_eq!(name.flex, 2);
/// assert_eq!(size.flex, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec<C> {
    /// Header content.
    pub content: C,
    /// Share of the flexible width relative to sibling columns.
    pub flex: u16,
    pub padding: Option<Edges>,
    pub align: Option<CellAlign>,
}

impl<C> ColumnSpec<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            flex: 1,
            padding: None,
            align: None,
        }
    }

    /// Set the flex weight. A weight of zero is treated as one.
    pub fn flex(mut self, weight: u16) -> Self {
        self.flex = weight.max(1);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = Some(align);
        self
    }
}
