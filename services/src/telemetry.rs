use crate::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,roster_services=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Pretty logs for local development, Stackdriver JSON everywhere else.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if config.is_local() {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_stackdriver::layer())
            .try_init()?;
    }

    Ok(())
}
