//! The grid primitive a [`Table`](crate::table::Table) builds.
//!
//! A `Grid` is a plain retained tree: rows of cells plus the width map
//! and border. Hosts can walk it directly, or hand it to
//! [`layout`](crate::layout::layout) and
//! [`render_to_buffer`](crate::render::render_to_buffer).

mod cell;
mod grid;

pub use cell::{Activation, CellContent, CheckState, Checkbox, GridCell};
pub use grid::{Grid, GridRow, RowKind};
