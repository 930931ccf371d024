//! Business layer of the roster app: the user table's states, computes and
//! commands, registered into a [`roster_states::StateCtx`].

mod config;
pub mod timer;
pub mod user_table;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use config::{DEFAULT_LOAD_DELAY, TableConfig, UserSource};
pub use user_table::{
    EditDialog, LoadUsersCommand, LoadUsersError, LoadUsersState, UserTableState, UserTableView,
    absorb_load_outcome, register_user_table, reload,
};
