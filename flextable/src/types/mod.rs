mod color;
mod decoration;
mod edges;
mod enums;

pub use color::{Color, Rgb};
pub use decoration::{Decoration, TableBorder};
pub use edges::Edges;
pub use enums::{Border, CellAlign, HAlign, TextStyle, VAlign};
