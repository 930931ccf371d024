use roster_business::{LoadUsersCommand, TableConfig, register_user_table};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(TableConfig::default())
    }
}

impl State {
    /// Registers the user table and starts its initial load.
    ///
    /// On native this must run inside a Tokio runtime context.
    pub fn with_config(config: TableConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_user_table(&mut ctx, config);
        ctx.dispatch::<LoadUsersCommand>();

        Self { ctx }
    }

    /// Built-in dataset with no load delay.
    pub fn test() -> Self {
        Self::with_config(TableConfig::immediate())
    }
}
