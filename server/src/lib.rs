//! QR overlay service library.
//!
//! Serves a single endpoint that renders a QR code for supplied text,
//! optionally compositing a remotely fetched logo centered on top of it.

pub mod app;
pub mod config;
pub mod server;
pub mod services;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load the process-wide configuration for the server.
pub fn init_config() -> AppConfig {
    load_dotenv();
    let config = AppConfig::from_env();
    tracing::info!(port = config.server_port, "Settings loaded");
    config
}
