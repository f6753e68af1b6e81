//! Shared HTTP client and single-fetch helper for listing-site requests.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings, plus [`fetch_html`],
//! the one place an outbound GET happens. Retry policy does not live here;
//! the orchestrator decides what to do with a failed fetch.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, one chosen per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for listing-site scraping.
///
/// The client has:
/// - Cookie store enabled
/// - Timeout from config (applies to every request it sends)
/// - Random User-Agent from the built-in rotation (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Perform a single GET and return the response body as text.
///
/// Exactly one outbound network call. Timeouts, connection errors, and
/// non-2xx statuses all surface as [`SearchError::Http`]; nothing here
/// hangs indefinitely or panics.
///
/// # Errors
///
/// Returns [`SearchError::Http`] on any network or status failure.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, SearchError> {
    let response = client
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("status error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("response read failed: {e}")))?;

    tracing::trace!(bytes = html.len(), "response received");
    Ok(html)
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn build_client_with_default_config() {
        let config = SearchConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = SearchConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn fetch_html_maps_connection_error() {
        let config = SearchConfig {
            timeout_seconds: 1,
            ..Default::default()
        };
        let client = build_client(&config).expect("client");
        // Reserved TEST-NET-1 address; nothing listens there.
        let result = fetch_html(&client, "http://192.0.2.1:9/").await;
        assert!(matches!(result, Err(SearchError::Http(_))));
    }
}
