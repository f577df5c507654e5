//! Presentation model for a board UI shell.
//!
//! Views are derived from the controller's board snapshot and the drag
//! coordinator; nothing here mutates state.

mod model;
mod palette;
mod render;

pub use model::{BoardView, CardView, ColumnView};
pub use palette::{ColumnSpec, PriorityStyle, column_spec, columns, priority_style};
pub use render::{ViewError, render_text};
