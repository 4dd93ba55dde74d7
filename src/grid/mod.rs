//! The checklist grid: merge ranges, layout settings and the edit
//! controller.

mod controller;
mod layout;
mod merge;

pub use controller::{build_render_rows, CameraField, ChecklistGrid, RenderRow, StatusPolicy};
pub use layout::{
    ColumnWidths, GridLayout, LayoutColumn, DEFAULT_FONT_SIZE, DEFAULT_ROW_HEIGHT,
    MIN_COLUMN_WIDTH,
};
pub use merge::{MergeColumn, MergeError, MergeManager, MergeRange};
