use std::any::Any;
use std::time::Duration;

use roster_states::{State, state_assign_impl};

/// Simulated latency of the initial load.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Where the table's initial dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserSource {
    /// The built-in dataset, no network involved.
    #[default]
    Static,
    /// Every page of `GET {api_base_url}/api/users`.
    Remote { api_base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub load_delay: Duration,
    pub source: UserSource,
}

impl TableConfig {
    pub fn new(load_delay: Duration, source: UserSource) -> Self {
        Self { load_delay, source }
    }

    /// Static dataset without the simulated delay.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, UserSource::Static)
    }

    pub fn remote(api_base_url: impl Into<String>) -> Self {
        Self::new(
            Duration::ZERO,
            UserSource::Remote {
                api_base_url: api_base_url.into(),
            },
        )
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_DELAY, UserSource::Static)
    }
}

impl State for TableConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
