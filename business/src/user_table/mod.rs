//! User table: state, derived view and the initial load.
//!
//! UI pattern:
//! - mutate through `ctx.state_mut::<UserTableState>()` (search, sort, paging, edit dialog)
//! - render from `ctx.cached::<UserTableView>()`
//! - call [`absorb_load_outcome`] once per frame after `sync_computes`

pub mod api;
mod load_command;
mod state;
mod view_compute;

use chrono::Utc;
use roster_states::StateCtx;

pub use api::LoadUsersError;
pub use load_command::{LoadUsersCommand, LoadUsersState};
pub use state::{EditDialog, UserTableState};
pub use view_compute::UserTableView;

use crate::config::TableConfig;

/// Register the table's states, compute and load command.
///
/// Does not start the load; dispatch [`LoadUsersCommand`] (or call [`reload`])
/// once a runtime is available.
pub fn register_user_table(ctx: &mut StateCtx, config: TableConfig) {
    ctx.add_state(config);
    ctx.add_state(UserTableState::default());
    ctx.add_state(LoadUsersState::default());
    ctx.record_compute(UserTableView::default());
    ctx.record_command(LoadUsersCommand);
}

/// Put the table back into its loading state and start a fresh load.
///
/// A load already in flight is cancelled.
pub fn reload(ctx: &mut StateCtx) {
    ctx.state_mut::<UserTableState>().start_loading();
    ctx.dispatch::<LoadUsersCommand>();
}

/// Move a finished load into the table state.
///
/// Returns `true` when an outcome was applied.
pub fn absorb_load_outcome(ctx: &mut StateCtx) -> bool {
    // Read first: `state_mut` marks the state changed.
    if !ctx.state::<LoadUsersState>().is_pending() {
        return false;
    }

    let Some(outcome) = ctx.state_mut::<LoadUsersState>().take_outcome() else {
        return false;
    };

    let table = ctx.state_mut::<UserTableState>();
    match outcome {
        Ok(users) => table.replace_users(users, Utc::now()),
        Err(err) => table.fail_load(err),
    }
    true
}
