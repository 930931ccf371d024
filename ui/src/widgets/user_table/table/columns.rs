//! Column definitions for the user table.

use egui_extras::Column;

pub const EMAIL_WIDTH: f32 = 240.0;
pub const TYPE_WIDTH: f32 = 90.0;
pub const ACTIONS_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Name, Email, Type, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(140.0), // Name - flexible
        Column::initial(EMAIL_WIDTH).at_least(120.0).resizable(true),
        Column::exact(TYPE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
