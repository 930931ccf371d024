//! Reactive state container shared by the business and UI crates.
//!
//! - [`State`]: plain data owned by the [`StateCtx`]
//! - [`Compute`]: values derived from states, re-run when their dependencies change
//! - [`Command`]: explicitly dispatched async work writing back through an [`Updater`]

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
