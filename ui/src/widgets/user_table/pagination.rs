use egui::{Button, Ui};
use roster_business::UserTableView;

use crate::utils::colors::COLOR_MUTED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Prev,
    Next,
}

/// Prev / "Page N" / Next row, with the match count on the right.
pub fn pagination_controls(ui: &mut Ui, view: &UserTableView) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(view.has_prev(), Button::new("Previous"))
            .clicked()
        {
            action = Some(PageAction::Prev);
        }

        ui.label(format!("Page {}", view.page));

        if ui
            .add_enabled(view.has_next(), Button::new("Next"))
            .clicked()
        {
            action = Some(PageAction::Next);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(
                COLOR_MUTED,
                format!("{} of {} users", view.filtered_count, view.total_count),
            );
        });
    });

    action
}
