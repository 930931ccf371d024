use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{TableConfig, UserTableState};
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::MockServer;

pub struct TestCtx<'a> {
    /// Keeps the mocked endpoints alive for remote tests.
    #[allow(unused)]
    pub mock_server: Option<MockServer>,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// Built-in dataset with no load delay.
    pub fn new_app() -> Self {
        Self::with_config(TableConfig::immediate())
    }

    pub fn with_config(config: TableConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = RosterApp::new(State::with_config(config));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server: None,
            harness,
        }
    }

    #[allow(unused)]
    pub fn with_server(mock_server: MockServer) -> Self {
        let mut ctx = Self::with_config(TableConfig::remote(mock_server.uri()));
        ctx.mock_server = Some(mock_server);
        ctx
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }
}

/// Read the table state from the app under test.
#[allow(unused)]
pub fn table_state<'h>(harness: &'h Harness<'_, RosterApp>) -> &'h UserTableState {
    harness.state().state.ctx.state::<UserTableState>()
}

/// Mutate the table state between frames, as the widgets would.
///
/// Clicks on widgets inside `TableBuilder` rows are not propagated by kittest,
/// so row-level interactions are driven through this instead.
#[allow(unused)]
pub fn update_table(harness: &mut Harness<'_, RosterApp>, f: impl FnOnce(&mut UserTableState)) {
    f(harness
        .state_mut()
        .state
        .ctx
        .state_mut::<UserTableState>());
    harness.run();
}

/// Step frames until the initial load has landed, then settle.
pub async fn wait_for_load(harness: &mut Harness<'_, RosterApp>) {
    for _ in 0..200 {
        harness.step();
        if !table_state(harness).is_loading() {
            harness.run();
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("Timed out waiting for the user table to load");
}
