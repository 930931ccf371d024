use roster_services::{config::Config, routes, telemetry, users::StaticUserDirectory};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const BUILD_DATE: &str = env!("ROSTER_BUILD_DATE");
const BUILD_COMMIT: &str = env!("ROSTER_BUILD_COMMIT");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: Config = Config::init()?;
    telemetry::init_tracing(&config)?;

    info!(build_date = BUILD_DATE, build_commit = BUILD_COMMIT, "Roster services");
    info!(
        environment = %config.environment(),
        server_addr = %config.server_addr(),
        port = %config.port(),
        "Configuration loaded"
    );

    let route = routes(StaticUserDirectory::default(), config.clone());

    let addr = SocketAddr::from((config.server_addr().parse::<IpAddr>()?, config.port()));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, route)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
