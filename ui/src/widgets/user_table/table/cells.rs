//! Cell rendering functions for the user table.

use egui::{RichText, Ui};

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

#[inline]
pub fn render_email_cell(ui: &mut Ui, email: &str) {
    ui.label(RichText::new(email).monospace());
}

/// Role label, first letter upper-cased by the caller.
#[inline]
pub fn render_type_cell(ui: &mut Ui, user_type: &str) {
    ui.label(user_type);
}

/// Returns `true` when the edit button was clicked.
#[inline]
pub fn render_edit_button(ui: &mut Ui) -> bool {
    ui.button("Edit").on_hover_text("Edit username").clicked()
}
