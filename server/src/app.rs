use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::AppConfig;

/// Bound on outbound logo fetches so a stalled upstream cannot pin a request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Immutable application configuration loaded at startup
    config: AppConfig,
    /// HTTP client for outbound logo fetches
    http: Client,
}

impl SharedState {
    /// Create shared state from a loaded config.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(FETCH_TIMEOUT).build()?;

        Ok(Self {
            inner: Arc::new(SharedStateInner { config, http }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn http(&self) -> &Client {
        &self.inner.http
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }
}
