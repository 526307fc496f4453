use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use ticketdesk::logging::init_tracing;
use ticketdesk::router::init_router;
use ticketdesk::state::init_app_state;
use ticketdesk_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!(error = ?e, "Server failed to start");
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env().context("Invalid server configuration")?;
    let state = init_app_state().await?;
    let app = init_router(state);

    let listener = TcpListener::bind(server_config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.bind_addr))?;
    info!(addr = %server_config.bind_addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
