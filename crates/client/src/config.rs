//! Client configuration loaded from environment variables.

use std::time::Duration;

/// Configuration for the API client and the session watcher it feeds.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, no trailing slash expected.
    pub api_base_url: String,
    /// How often a mounted protected view re-checks its session.
    pub check_interval: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

/// Default recurring session-check interval in seconds.
const DEFAULT_CHECK_INTERVAL_SECS: u64 = 60;

/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Reads `.env` first for local development.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `API_BASE_URL`                | `http://localhost:4000` |
    /// | `SESSION_CHECK_INTERVAL_SECS` | `60`                    |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    ///
    /// # Panics
    ///
    /// Panics if an interval variable is set but not a valid u64.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".into());

        let check_interval_secs: u64 = std::env::var("SESSION_CHECK_INTERVAL_SECS")
            .unwrap_or_else(|_| DEFAULT_CHECK_INTERVAL_SECS.to_string())
            .parse()
            .expect("SESSION_CHECK_INTERVAL_SECS must be a valid u64");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_base_url,
            check_interval: Duration::from_secs(check_interval_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000".into(),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
