//! QR overlay server binary.
//!
//! Starts the axum web server and serves until Ctrl+C.

use tracing_subscriber::EnvFilter;

use qr_overlay_lib::app::SharedState;
use qr_overlay_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting QR overlay server");

    let config = qr_overlay_lib::init_config();
    let state = SharedState::new(config)?;

    tracing::info!(
        port = state.server_port(),
        "Server running. Press Ctrl+C to stop."
    );
    server::start_server(state).await?;

    Ok(())
}
