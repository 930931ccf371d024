//! Initial load of the user table.
//!
//! `LoadUsersCommand` waits out the configured delay, fetches the dataset and
//! publishes the outcome into `LoadUsersState`. The frame loop then moves that
//! outcome into [`UserTableState`](super::UserTableState) through
//! [`absorb_load_outcome`](super::absorb_load_outcome).

use std::any::Any;

use roster_model::{User, mock_users};
use roster_states::{Command, CommandFuture, CommandSnapshot, State, Updater, state_assign_impl};
use tokio_util::sync::CancellationToken;

use super::api;
use crate::config::{TableConfig, UserSource};
use crate::timer;

/// Mailbox between the load command and the table state.
#[derive(Debug, Clone, Default)]
pub struct LoadUsersState {
    outcome: Option<Result<Vec<User>, String>>,
}

impl LoadUsersState {
    pub fn loaded(users: Vec<User>) -> Self {
        Self {
            outcome: Some(Ok(users)),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            outcome: Some(Err(error.into())),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn take_outcome(&mut self) -> Option<Result<Vec<User>, String>> {
        self.outcome.take()
    }
}

impl State for LoadUsersState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.try_state::<TableConfig>().cloned().unwrap_or_default();

        Box::pin(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    log::debug!("User load cancelled before completion");
                }
                outcome = load(config) => {
                    updater.set(match outcome {
                        Ok(users) => LoadUsersState::loaded(users),
                        Err(err) => {
                            log::error!("Failed to load users: {err}");
                            LoadUsersState::failed(err.to_string())
                        }
                    });
                }
            }
        })
    }
}

async fn load(config: TableConfig) -> api::ApiResult<Vec<User>> {
    timer::sleep(config.load_delay).await;

    match config.source {
        UserSource::Static => {
            let users = mock_users();
            log::info!("Loaded {} users from the built-in dataset", users.len());
            Ok(users)
        }
        UserSource::Remote { api_base_url } => api::fetch_all_users(&api_base_url).await,
    }
}
