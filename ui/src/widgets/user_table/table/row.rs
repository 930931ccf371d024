//! Row rendering for the user table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_model::User;

use super::cells::{render_edit_button, render_email_cell, render_name_cell, render_type_cell};

/// Renders a single user row. Returns `true` when its edit button was clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) -> bool {
    let mut edit_clicked = false;

    row.col(|ui| {
        render_name_cell(ui, &user.name);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_email_cell(ui, &user.email);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_type_cell(ui, &user.display_type());
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        edit_clicked = render_edit_button(ui);
        draw_cell_bottom_border(ui);
    });

    edit_clicked
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
