//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::ScraperConfig;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every portal request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Total per-request timeout from the config
/// - Redirect following capped at `max_redirects` hops
/// - Rustls TLS backend (no native TLS)
///
/// The client owns a connection pool and is cheap to clone; clones share the
/// pool, so one client serves concurrent callers without extra locking.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &ScraperConfig) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
