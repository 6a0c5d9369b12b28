//! Non-fatal problems found while building a table.

use crate::row::RowSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableDiagnostic {
    /// A row supplied a different number of cells than there are columns.
    /// Extra cells are dropped and missing ones are left empty.
    #[error("row {row} has {cells} cells but the table has {columns} columns")]
    RowLengthMismatch {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

/// One diagnostic per row whose cell count differs from `columns`.
pub(crate) fn row_mismatches<C>(rows: &[RowSpec<C>], columns: usize) -> Vec<TableDiagnostic> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.cells.len() != columns)
        .map(|(row, r)| TableDiagnostic::RowLengthMismatch {
            row,
            cells: r.cells.len(),
            columns,
        })
        .collect()
}
