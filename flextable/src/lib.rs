pub mod buffer;
pub mod column;
pub mod defaults;
pub mod diagnostic;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod row;
pub mod table;
pub mod text;
pub mod types;
pub mod width;

pub use buffer::{Buffer, Cell};
pub use column::ColumnSpec;
pub use defaults::{TableDefaults, DEFAULT_CHECKBOX_WIDTH};
pub use diagnostic::TableDiagnostic;
pub use element::{Activation, CellContent, CheckState, Checkbox, Grid, GridCell, GridRow, RowKind};
pub use event::{dispatch_click, Interaction};
pub use hit::{hit_test, Hit};
pub use layout::{layout, LayoutResult, Rect, Span};
pub use render::{render_to_buffer, Paint, Renderable};
pub use row::{RowSpec, SelectHandler, TapHandler};
pub use table::Table;
pub use types::*;
pub use width::{column_widths, resolve_widths, ColumnWidth};
