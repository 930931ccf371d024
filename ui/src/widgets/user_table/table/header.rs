//! Table header rendering for the user table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_model::{SortConfig, UserField};

/// Header text, with ▲/▼ on the active sort column.
pub fn header_label(field: UserField, sort: Option<SortConfig>) -> String {
    match sort {
        Some(config) if config.key == field => {
            format!("{} {}", field.label(), config.direction.indicator())
        }
        _ => field.label().to_owned(),
    }
}

/// Renders the sortable header cells. Returns the column that was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: Option<SortConfig>,
) -> Option<UserField> {
    let mut clicked = None;

    for field in UserField::SORTABLE {
        header.col(|ui| {
            if render_sortable_header_cell(ui, &header_label(field, sort)) {
                clicked = Some(field);
            }
        });
    }

    header.col(|ui| {
        ui.strong("Actions");
    });

    clicked
}

#[inline]
fn render_sortable_header_cell(ui: &mut Ui, label: &str) -> bool {
    ui.add(Button::new(RichText::new(label).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
}
