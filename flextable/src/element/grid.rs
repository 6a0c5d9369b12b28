use std::collections::BTreeMap;

use super::{Checkbox, GridCell};
use crate::diagnostic::TableDiagnostic;
use crate::types::{Decoration, TableBorder};
use crate::width::ColumnWidth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    /// Data row with its index in the caller's row list.
    Data(usize),
}

#[derive(Debug, Clone)]
pub struct GridRow<C> {
    pub id: String,
    pub kind: RowKind,
    pub decoration: Option<Decoration>,
    pub cells: Vec<GridCell<C>>,
}

impl<C> GridRow<C> {
    pub fn is_header(&self) -> bool {
        self.kind == RowKind::Header
    }

    /// The leading checkbox, if the row has one.
    pub fn checkbox(&self) -> Option<&Checkbox> {
        self.cells.first().and_then(|cell| cell.content.as_checkbox())
    }

    /// Caller-supplied content in column order, skipping checkbox,
    /// placeholder and empty cells.
    pub fn contents(&self) -> impl Iterator<Item = &C> {
        self.cells.iter().filter_map(|cell| cell.content.as_content())
    }
}

/// A built table, ready for a host to lay out and draw.
#[derive(Debug, Clone)]
pub struct Grid<C> {
    pub id: String,
    pub border: TableBorder,
    pub column_widths: BTreeMap<usize, ColumnWidth>,
    /// Header first, then data rows in input order.
    pub rows: Vec<GridRow<C>>,
    /// Problems found while building. Already logged.
    pub diagnostics: Vec<TableDiagnostic>,
}

impl<C> Grid<C> {
    /// Number of grid columns, checkbox column included.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn header(&self) -> Option<&GridRow<C>> {
        self.rows.first().filter(|row| row.is_header())
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &GridRow<C>> {
        self.rows.iter().filter(|row| !row.is_header())
    }

    pub fn find_cell(&self, id: &str) -> Option<&GridCell<C>> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.id == id)
    }

    /// True when no cell content was dropped or padded.
    pub fn is_consistent(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
