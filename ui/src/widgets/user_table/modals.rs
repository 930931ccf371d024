//! Modal dialogs for the user table.

use egui::{Ui, Window};
use roster_business::UserTableState;
use roster_states::StateCtx;

pub const USERNAME_LABEL: &str = "New username:";

enum EditOutcome {
    Confirm,
    Cancel,
}

/// Shows the edit username modal while a dialog is open.
pub fn show_edit_username_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(dialog) = state_ctx.state::<UserTableState>().edit_dialog() else {
        return;
    };
    let mut input = dialog.input.clone();
    let mut open = true;
    let mut outcome = None;

    let input_changed = Window::new("Edit username")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            let changed = ui
                .horizontal(|ui| {
                    let label = ui.label(USERNAME_LABEL);
                    ui.text_edit_singleline(&mut input)
                        .labelled_by(label.id)
                        .changed()
                })
                .inner;

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    outcome = Some(EditOutcome::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(EditOutcome::Cancel);
                }
            });

            changed
        })
        .and_then(|response| response.inner)
        .unwrap_or(false);

    if !open {
        outcome = Some(EditOutcome::Cancel);
    }

    if !input_changed && outcome.is_none() {
        return;
    }

    let state = state_ctx.state_mut::<UserTableState>();
    if input_changed && let Some(target) = state.edit_input_mut() {
        *target = input;
    }
    match outcome {
        Some(EditOutcome::Confirm) => {
            state.confirm_edit();
        }
        Some(EditOutcome::Cancel) => state.cancel_edit(),
        None => {}
    }
}
