use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use flextable::{
    CellAlign, CellContent, CheckState, Color, ColumnSpec, ColumnWidth, Decoration, Edges, Grid,
    RowKind, RowSpec, Table, TableBorder, TableDefaults, TableDiagnostic, DEFAULT_CHECKBOX_WIDTH,
};

fn three_columns() -> Vec<ColumnSpec<&'static str>> {
    vec![
        ColumnSpec::new("Name"),
        ColumnSpec::new("Email"),
        ColumnSpec::new("Role"),
    ]
}

fn two_rows() -> Vec<RowSpec<&'static str>> {
    vec![
        RowSpec::new(["ada", "ada@example.com", "admin"]),
        RowSpec::new(["grace", "grace@example.com", "editor"]).selected(true),
    ]
}

fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |value| sink.lock().unwrap().push(value))
}

fn contents(grid: &Grid<&'static str>, row: usize) -> Vec<&'static str> {
    grid.rows[row].contents().copied().collect()
}

// ============================================================================
// Basic structure
// ============================================================================

#[test]
fn test_header_plus_one_row_per_entry() {
    let grid = Table::new(three_columns(), two_rows()).build();

    assert_eq!(grid.rows.len(), 3);
    for row in &grid.rows {
        assert_eq!(row.cells.len(), 3, "row {}", row.id);
    }
    assert_eq!(grid.rows[0].kind, RowKind::Header);
    assert_eq!(grid.rows[1].kind, RowKind::Data(0));
    assert_eq!(grid.rows[2].kind, RowKind::Data(1));
}

#[test]
fn test_three_equal_columns_without_checkboxes() {
    let grid = Table::new(three_columns(), two_rows()).build();

    let expected: BTreeMap<usize, ColumnWidth> =
        [(0, ColumnWidth::Flex(1)), (1, ColumnWidth::Flex(1)), (2, ColumnWidth::Flex(1))]
            .into_iter()
            .collect();
    assert_eq!(grid.column_widths, expected);
    assert_eq!(
        grid.rows[0].decoration,
        Some(Decoration::fill(Color::grey(238)))
    );
    assert!(grid.is_consistent());
}

#[test]
fn test_cells_keep_input_order() {
    let grid = Table::new(three_columns(), two_rows()).build();

    assert_eq!(contents(&grid, 0), vec!["Name", "Email", "Role"]);
    assert_eq!(contents(&grid, 1), vec!["ada", "ada@example.com", "admin"]);
    assert_eq!(contents(&grid, 2), vec!["grace", "grace@example.com", "editor"]);
}

#[test]
fn test_ids_derive_from_table_id() {
    let grid = Table::new(three_columns(), two_rows()).build();
    assert_eq!(grid.id, "table");
    assert_eq!(grid.rows[0].id, "table-header");
    assert_eq!(grid.rows[1].cells[2].id, "table-row-0-2");

    let grid = Table::new(three_columns(), two_rows()).id("users").build();
    assert_eq!(grid.rows[2].id, "users-row-1");
    assert!(grid.find_cell("users-header-1").is_some());
}

#[test]
fn test_no_rows_gives_header_only() {
    let grid = Table::new(three_columns(), Vec::new()).build();

    assert_eq!(grid.rows.len(), 1);
    assert!(grid.header().is_some());
    assert_eq!(grid.data_rows().count(), 0);
}

// ============================================================================
// Defaults and overrides
// ============================================================================

#[test]
fn test_optional_fields_fall_back_to_defaults() {
    let defaults = TableDefaults::new();
    let grid = Table::new(three_columns(), two_rows()).build();

    assert_eq!(grid.border, defaults.border);
    assert_eq!(grid.border, TableBorder::all(Color::grey(224)));
    assert_eq!(grid.rows[0].decoration, Some(defaults.header_decoration()));
    assert_eq!(grid.rows[1].decoration, None);

    for row in &grid.rows {
        for cell in &row.cells {
            assert_eq!(cell.padding, Edges::horizontal(1));
            assert_eq!(cell.align, CellAlign::CENTER_LEFT);
        }
    }
}

#[test]
fn test_table_level_padding_and_alignment() {
    let grid = Table::new(three_columns(), two_rows())
        .cell_padding(Edges::all(2))
        .cell_align(CellAlign::CENTER)
        .build();

    let cell = &grid.rows[1].cells[0];
    assert_eq!(cell.padding, Edges::all(2));
    assert_eq!(cell.align, CellAlign::CENTER);
}

#[test]
fn test_column_overrides_apply_to_header_and_data_cells() {
    let columns = vec![
        ColumnSpec::new("Name"),
        ColumnSpec::new("Size")
            .padding(Edges::new(0, 3, 0, 0))
            .align(CellAlign::CENTER_RIGHT),
    ];
    let rows = vec![RowSpec::new(["a.txt", "12"])];
    let grid = Table::new(columns, rows).build();

    for row in &grid.rows {
        assert_eq!(row.cells[0].padding, Edges::horizontal(1));
        assert_eq!(row.cells[1].padding, Edges::new(0, 3, 0, 0));
        assert_eq!(row.cells[1].align, CellAlign::CENTER_RIGHT);
    }
}

#[test]
fn test_custom_header_decoration_and_border() {
    let header = Decoration::fill(Color::rgb(0, 0, 80)).foreground(Color::WHITE).bold();
    let grid = Table::new(three_columns(), two_rows())
        .header_decoration(header)
        .border(TableBorder::none())
        .build();

    assert_eq!(grid.rows[0].decoration, Some(header));
    assert!(!grid.border.is_visible());
}

#[test]
fn test_row_decoration_stays_on_the_row() {
    let decoration = Decoration::fill(Color::rgb(30, 30, 30)).radius(2);
    let rows = vec![RowSpec::new(["a", "b", "c"]).decoration(decoration)];
    let grid = Table::new(three_columns(), rows).build();

    assert_eq!(grid.rows[1].decoration, Some(decoration));
}

// ============================================================================
// Checkboxes
// ============================================================================

#[test]
fn test_checkboxes_prepend_fixed_column() {
    let grid = Table::new(three_columns(), two_rows())
        .show_checkboxes(true)
        .build();

    assert_eq!(
        grid.column_widths.get(&0),
        Some(&ColumnWidth::Fixed(DEFAULT_CHECKBOX_WIDTH))
    );
    assert_eq!(grid.column_widths.get(&3), Some(&ColumnWidth::Flex(1)));
    for row in &grid.rows {
        assert_eq!(row.cells.len(), 4);
    }
}

#[test]
fn test_header_checkbox_reflects_all_selected() {
    let grid = Table::new(three_columns(), two_rows())
        .show_checkboxes(true)
        .all_selected(true)
        .build();

    let checkbox = grid.rows[0].checkbox().expect("header checkbox");
    assert_eq!(checkbox.state, CheckState::Checked);
    assert!(checkbox.tristate);
}

#[test]
fn test_header_checkbox_toggle_calls_select_all_once() {
    let (calls, on_select_all) = recorder();
    let grid = Table::new(three_columns(), two_rows())
        .show_checkboxes(true)
        .all_selected(true)
        .on_select_all(on_select_all)
        .build();

    let checkbox = grid.rows[0].checkbox().unwrap();
    assert_eq!(checkbox.toggle(), Some(false));

    assert_eq!(*calls.lock().unwrap(), vec![false]);
    // State is owned by the caller; the grid shows the old value until rebuilt.
    assert_eq!(grid.rows[0].checkbox().unwrap().state, CheckState::Checked);
}

#[test]
fn test_hidden_header_checkbox_leaves_placeholder() {
    let grid = Table::new(three_columns(), two_rows())
        .show_checkboxes(true)
        .show_header_checkbox(false)
        .build();

    let leading = &grid.rows[0].cells[0];
    assert!(matches!(
        leading.content,
        CellContent::Placeholder {
            width: DEFAULT_CHECKBOX_WIDTH
        }
    ));
    assert!(grid.rows[0].checkbox().is_none());

    assert_eq!(
        grid.rows[1].checkbox().unwrap().state,
        CheckState::Unchecked
    );
    assert_eq!(grid.rows[2].checkbox().unwrap().state, CheckState::Checked);
}

#[test]
fn test_row_checkbox_calls_its_own_handler() {
    let (first, on_first) = recorder();
    let (second, on_second) = recorder();
    let rows = vec![
        RowSpec::new(["a", "b", "c"]).on_select(on_first),
        RowSpec::new(["d", "e", "f"]).selected(true).on_select(on_second),
    ];
    let grid = Table::new(three_columns(), rows)
        .show_checkboxes(true)
        .build();

    assert_eq!(grid.rows[2].checkbox().unwrap().toggle(), Some(false));

    assert!(first.lock().unwrap().is_empty());
    assert_eq!(*second.lock().unwrap(), vec![false]);
}

#[test]
fn test_checkbox_without_handler_is_disabled() {
    let grid = Table::new(three_columns(), two_rows())
        .show_checkboxes(true)
        .build();

    let checkbox = grid.rows[1].checkbox().unwrap();
    assert!(!checkbox.is_enabled());
    assert_eq!(checkbox.toggle(), None);
}

#[test]
fn test_checkbox_width_and_padding_come_from_defaults() {
    let grid = Table::new(three_columns(), two_rows())
        .defaults(TableDefaults {
            checkbox_width: 4,
            ..TableDefaults::new()
        })
        .checkbox_padding(Edges::horizontal(1))
        .show_checkboxes(true)
        .build();

    assert_eq!(grid.column_widths.get(&0), Some(&ColumnWidth::Fixed(4)));
    assert_eq!(grid.rows[1].cells[0].padding, Edges::horizontal(1));
    assert_eq!(grid.rows[1].cells[0].align, CellAlign::CENTER);
}

// ============================================================================
// Tap regions
// ============================================================================

#[test]
fn test_data_cells_are_tap_regions_without_feedback() {
    let rows = vec![RowSpec::new(["a", "b", "c"]).on_tap(|| {})];
    let grid = Table::new(three_columns(), rows)
        .show_checkboxes(true)
        .build();

    for cell in &grid.rows[1].cells[1..] {
        assert!(cell.on_tap.is_some());
        assert!(!cell.tap_feedback);
    }
    for cell in &grid.rows[0].cells {
        assert!(cell.on_tap.is_none());
    }
}

// ============================================================================
// Row length mismatch
// ============================================================================

#[test]
fn test_short_row_is_padded_with_empty_cells() {
    let rows = vec![RowSpec::new(["only", "two"])];
    let grid = Table::new(three_columns(), rows).build();

    let row = &grid.rows[1];
    assert_eq!(row.cells.len(), 3);
    assert!(matches!(row.cells[2].content, CellContent::Empty));
    assert_eq!(contents(&grid, 1), vec!["only", "two"]);
}

#[test]
fn test_long_row_drops_extra_cells() {
    let rows = vec![RowSpec::new(["a", "b", "c", "dropped"])];
    let grid = Table::new(three_columns(), rows).build();

    assert_eq!(grid.rows[1].cells.len(), 3);
    assert_eq!(contents(&grid, 1), vec!["a", "b", "c"]);
}

#[test]
fn test_one_diagnostic_per_mismatched_row() {
    let rows = vec![
        RowSpec::new(["a", "b", "c"]),
        RowSpec::new(["a", "b"]),
        RowSpec::new(["a", "b", "c"]),
        RowSpec::new(["a", "b", "c", "d"]),
    ];
    let grid = Table::new(three_columns(), rows).build();

    assert_eq!(
        grid.diagnostics,
        vec![
            TableDiagnostic::RowLengthMismatch {
                row: 1,
                cells: 2,
                columns: 3
            },
            TableDiagnostic::RowLengthMismatch {
                row: 3,
                cells: 4,
                columns: 3
            },
        ]
    );
    assert_eq!(grid.rows.len(), 5);
    assert!(!grid.is_consistent());
}

#[test]
fn test_validate_reports_first_mismatch() {
    let table = Table::new(three_columns(), vec![RowSpec::new(["a"]), RowSpec::new(["b"])]);
    assert_eq!(
        table.validate(),
        Err(TableDiagnostic::RowLengthMismatch {
            row: 0,
            cells: 1,
            columns: 3
        })
    );

    assert_eq!(Table::new(three_columns(), two_rows()).validate(), Ok(()));
}

#[test]
fn test_diagnostic_message() {
    let diagnostic = TableDiagnostic::RowLengthMismatch {
        row: 4,
        cells: 2,
        columns: 3,
    };
    assert_eq!(
        diagnostic.to_string(),
        "row 4 has 2 cells but the table has 3 columns"
    );
}
