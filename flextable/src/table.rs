//! Table widget - turns column and row specs into a [`Grid`].
//!
//! The table is stateless. Every call to [`Table::build`] produces a fresh
//! grid from its inputs; checkbox and tap callbacks report what the user
//! asked for and the caller rebuilds with updated specs.
//!
//! # Example
//!
//! ```
//! use flextable::{ColumnSpec, RowSpec, Table};
//!
//! let grid = Table::new(
//!     vec![ColumnSpec::new("Name").flex(2), ColumnSpec::new("Email")],
//!     vec![
//!         RowSpec::new(["Ada", "ada@example.com"]),
//!         RowSpec::new(["Grace", "grace@example.com"]).selected(true),
//!     ],
//! )
//! .show_checkboxes(true)
//! .build();
//!
//! assert_eq!(grid.rows.len(), 3);
//! assert_eq!(grid.column_count(), 3);
//! ```

use crate::column::ColumnSpec;
use crate::defaults::TableDefaults;
use crate::diagnostic::{row_mismatches, TableDiagnostic};
use crate::element::{CellContent, Checkbox, Grid, GridCell, GridRow, RowKind};
use crate::row::{RowSpec, SelectHandler};
use crate::types::{CellAlign, Decoration, Edges, TableBorder};
use crate::width::column_widths;

/// A table widget builder.
pub struct Table<C> {
    id: String,
    columns: Vec<ColumnSpec<C>>,
    rows: Vec<RowSpec<C>>,
    defaults: TableDefaults,
    header_decoration: Option<Decoration>,
    border: Option<TableBorder>,
    cell_padding: Option<Edges>,
    cell_align: Option<CellAlign>,
    show_checkboxes: bool,
    show_header_checkbox: bool,
    checkbox_padding: Option<Edges>,
    all_selected: bool,
    on_select_all: Option<SelectHandler>,
}

impl<C> Table<C> {
    /// Create a table from columns and rows.
    pub fn new(columns: Vec<ColumnSpec<C>>, rows: Vec<RowSpec<C>>) -> Self {
        Self {
            id: "table".into(),
            columns,
            rows,
            defaults: TableDefaults::new(),
            header_decoration: None,
            border: None,
            cell_padding: None,
            cell_align: None,
            show_checkboxes: false,
            show_header_checkbox: true,
            checkbox_padding: None,
            all_selected: false,
            on_select_all: None,
        }
    }

    /// Set the table id. Row and cell ids are derived from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the fallback values used for anything left unset.
    pub fn defaults(mut self, defaults: TableDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the header row decoration (default: neutral fill).
    pub fn header_decoration(mut self, decoration: Decoration) -> Self {
        self.header_decoration = Some(decoration);
        self
    }

    /// Set the grid lines (default: light grey, all lines).
    pub fn border(mut self, border: TableBorder) -> Self {
        self.border = Some(border);
        self
    }

    /// Padding for cells whose column does not override it.
    pub fn cell_padding(mut self, padding: Edges) -> Self {
        self.cell_padding = Some(padding);
        self
    }

    /// Alignment for cells whose column does not override it.
    pub fn cell_align(mut self, align: CellAlign) -> Self {
        self.cell_align = Some(align);
        self
    }

    /// Prefix every row with a selection checkbox column.
    pub fn show_checkboxes(mut self, show: bool) -> Self {
        self.show_checkboxes = show;
        self
    }

    /// Show the select-all checkbox in the header. When hidden, the header
    /// keeps an empty cell in the checkbox column.
    pub fn show_header_checkbox(mut self, show: bool) -> Self {
        self.show_header_checkbox = show;
        self
    }

    pub fn checkbox_padding(mut self, padding: Edges) -> Self {
        self.checkbox_padding = Some(padding);
        self
    }

    /// State shown by the header checkbox.
    pub fn all_selected(mut self, all_selected: bool) -> Self {
        self.all_selected = all_selected;
        self
    }

    /// Called with the requested value when the header checkbox is toggled.
    pub fn on_select_all(mut self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_select_all = Some(std::sync::Arc::new(handler));
        self
    }

    /// Check every row against the column count.
    ///
    /// `build` tolerates mismatches; this is for callers that want to
    /// reject them instead.
    pub fn validate(&self) -> Result<(), TableDiagnostic> {
        match row_mismatches(&self.rows, self.columns.len()).into_iter().next() {
            Some(diagnostic) => Err(diagnostic),
            None => Ok(()),
        }
    }

    /// Build the grid.
    ///
    /// Never fails. Rows with the wrong number of cells are logged, recorded
    /// in [`Grid::diagnostics`] and rendered positionally: extra cells are
    /// dropped, missing ones become [`CellContent::Empty`].
    pub fn build(self) -> Grid<C> {
        let Table {
            id,
            columns,
            rows,
            defaults,
            header_decoration,
            border,
            cell_padding,
            cell_align,
            show_checkboxes,
            show_header_checkbox,
            checkbox_padding,
            all_selected,
            on_select_all,
        } = self;

        let diagnostics = row_mismatches(&rows, columns.len());
        for diagnostic in &diagnostics {
            log::warn!("[table] {id}: {diagnostic}");
        }

        let checkbox_width = show_checkboxes.then_some(defaults.checkbox_width);
        let widths = column_widths(&columns, checkbox_width);

        let cell_padding = cell_padding.unwrap_or(defaults.cell_padding);
        let cell_align = cell_align.unwrap_or(defaults.cell_align);
        let formats: Vec<CellFormat> = columns
            .iter()
            .map(|column| CellFormat {
                padding: column.padding.unwrap_or(cell_padding),
                align: column.align.unwrap_or(cell_align),
            })
            .collect();

        let assembler = RowAssembler {
            table_id: &id,
            formats: &formats,
            checkbox: checkbox_width.map(|width| CheckboxColumn {
                width,
                padding: checkbox_padding.unwrap_or(defaults.checkbox_padding),
            }),
        };

        let mut grid_rows = Vec::with_capacity(rows.len() + 1);
        grid_rows.push(assembler.header(
            columns,
            header_decoration.unwrap_or_else(|| defaults.header_decoration()),
            show_header_checkbox,
            all_selected,
            on_select_all,
        ));
        grid_rows.extend(
            rows.into_iter()
                .enumerate()
                .map(|(index, row)| assembler.data(index, row)),
        );

        log::debug!(
            "[table] built {id}: {} columns, {} rows, checkboxes={show_checkboxes}",
            widths.len(),
            grid_rows.len(),
        );

        Grid {
            border: border.unwrap_or(defaults.border),
            column_widths: widths,
            rows: grid_rows,
            diagnostics,
            id,
        }
    }
}

/// Resolved padding and alignment of one column.
#[derive(Clone, Copy)]
struct CellFormat {
    padding: Edges,
    align: CellAlign,
}

#[derive(Clone, Copy)]
struct CheckboxColumn {
    width: u16,
    padding: Edges,
}

struct RowAssembler<'a> {
    table_id: &'a str,
    formats: &'a [CellFormat],
    checkbox: Option<CheckboxColumn>,
}

impl RowAssembler<'_> {
    fn header<C>(
        &self,
        columns: Vec<ColumnSpec<C>>,
        decoration: Decoration,
        show_header_checkbox: bool,
        all_selected: bool,
        on_select_all: Option<SelectHandler>,
    ) -> GridRow<C> {
        let row_id = format!("{}-header", self.table_id);
        let mut cells = Vec::with_capacity(self.formats.len() + 1);

        if let Some(column) = self.checkbox {
            let content = if show_header_checkbox {
                CellContent::Checkbox(
                    Checkbox::new(all_selected)
                        .tristate(true)
                        .on_change(on_select_all),
                )
            } else {
                CellContent::Placeholder {
                    width: column.width,
                }
            };
            cells.push(
                GridCell::new(format!("{row_id}-checkbox"), content)
                    .padding(column.padding)
                    .align(CellAlign::CENTER),
            );
        }

        cells.extend(
            columns
                .into_iter()
                .zip(self.formats)
                .enumerate()
                .map(|(i, (column, format))| {
                    GridCell::new(
                        format!("{row_id}-{i}"),
                        CellContent::Content(column.content),
                    )
                    .padding(format.padding)
                    .align(format.align)
                }),
        );

        GridRow {
            id: row_id,
            kind: RowKind::Header,
            decoration: Some(decoration),
            cells,
        }
    }

    fn data<C>(&self, index: usize, row: RowSpec<C>) -> GridRow<C> {
        let row_id = format!("{}-row-{index}", self.table_id);
        let mut cells = Vec::with_capacity(self.formats.len() + 1);

        if let Some(column) = self.checkbox {
            cells.push(
                GridCell::new(
                    format!("{row_id}-checkbox"),
                    CellContent::Checkbox(Checkbox::new(row.selected).on_change(row.on_select)),
                )
                .padding(column.padding)
                .align(CellAlign::CENTER),
            );
        }

        let mut contents = row.cells.into_iter();
        cells.extend(self.formats.iter().enumerate().map(|(i, format)| {
            let content = contents
                .next()
                .map_or(CellContent::Empty, CellContent::Content);
            GridCell::new(format!("{row_id}-{i}"), content)
                .padding(format.padding)
                .align(format.align)
                .on_tap(row.on_tap.clone())
        }));

        GridRow {
            id: row_id,
            kind: RowKind::Data(index),
            decoration: row.decoration,
            cells,
        }
    }
}
