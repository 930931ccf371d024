//! Main panel for the user table.
//!
//! Renders from `UserTableView` and collects interactions while drawing;
//! state is mutated once everything is drawn.

use chrono::Local;
use egui::{Frame, Margin, Response, Stroke, Ui};
use roster_business::{UserTableState, UserTableView, reload};
use roster_states::StateCtx;

use super::modals::show_edit_username_modal;
use super::pagination::{PageAction, pagination_controls};
use super::search::search_box;
use super::table::{TableAction, render_users_table};
use crate::utils::colors::{COLOR_MUTED, COLOR_RED, TABLE_BORDER_COLOR};

/// Everything the user did during one frame of the panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelActions {
    pub search: Option<String>,
    pub table: Option<TableAction>,
    pub page: Option<PageAction>,
}

impl PanelActions {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.table.is_none() && self.page.is_none()
    }

    /// Search first, so a page click in the same frame lands on the new results.
    pub fn apply(self, state: &mut UserTableState) {
        if let Some(term) = self.search {
            state.search(term);
        }
        match self.table {
            Some(TableAction::Sort(field)) => state.request_sort(field),
            Some(TableAction::Edit(user_id)) => {
                state.open_edit(user_id);
            }
            None => {}
        }
        match self.page {
            Some(PageAction::Prev) => state.prev_page(),
            Some(PageAction::Next) => state.next_page(),
            None => {}
        }
    }
}

pub fn user_table_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        let state = state_ctx.state::<UserTableState>();

        if state.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
            return;
        }

        if let Some(error) = state.load_error() {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
            if ui.button("Retry").clicked() {
                reload(state_ctx);
            }
            return;
        }

        let mut actions = PanelActions {
            search: search_box(ui, state.search_term()),
            ..PanelActions::default()
        };
        if let Some(loaded) = state.last_loaded() {
            ui.colored_label(
                COLOR_MUTED,
                format!(
                    "Last loaded at {}",
                    loaded.with_timezone(&Local).format("%H:%M:%S")
                ),
            );
        }
        let sort = state.sort();
        ui.add_space(8.0);

        let view = state_ctx.cached::<UserTableView>();
        actions.table = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::symmetric(4, 4))
            .show(ui, |ui| render_users_table(ui, view, sort))
            .inner;

        if view.rows.is_empty() {
            ui.label("No users found");
        }

        ui.add_space(8.0);
        actions.page = pagination_controls(ui, view);

        if !actions.is_empty() {
            actions.apply(state_ctx.state_mut::<UserTableState>());
        }
    });

    show_edit_username_modal(state_ctx, ui);

    response.response
}
