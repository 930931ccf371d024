use roster_business::absorb_load_outcome;

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        if absorb_load_outcome(&mut self.state.ctx) {
            // Render the loaded rows in this same frame.
            self.state.ctx.run_computed();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users");
            ui.separator();
            widgets::user_table_panel(&mut self.state.ctx, ui);
        });

        let changed = self.state.ctx.has_pending_changes();
        self.state.ctx.run_computed();
        if changed {
            ctx.request_repaint();
        }
    }
}
