//! Table components for the user table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header row
//! - `row`: One row per user
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::UserTableView;
use roster_model::{SortConfig, UserField};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Interaction collected while rendering the table, applied after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Sort(UserField),
    Edit(u32),
}

pub fn render_users_table(
    ui: &mut Ui,
    view: &UserTableView,
    sort: Option<SortConfig>,
) -> Option<TableAction> {
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(field) = render_table_header(&mut header, sort) {
                action = Some(TableAction::Sort(field));
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                let user = &view.rows[row.index()];
                if render_user_row(&mut row, user) {
                    action = Some(TableAction::Edit(user.id));
                }
            });
        });

    action
}
