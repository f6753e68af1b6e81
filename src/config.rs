//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls source priority, timeouts, cache bounds,
//! pagination, and the optional static chat allow-list. Environment and
//! file loading belong to the embedding process, not this crate.

use crate::error::SearchError;
use crate::types::SourceId;

/// Configuration for the search pipeline.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which sources to query, in priority order. The orchestrator stops
    /// at the first source that yields a non-empty result list.
    pub sources: Vec<SourceId>,
    /// Results per rendered menu page.
    pub page_size: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// How long cached result lists stay valid, in seconds.
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached queries; beyond this the least-recently-used
    /// entry is evicted.
    pub cache_capacity: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Static chat allow-list. `None` means open access.
    pub allowed_chats: Option<Vec<i64>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: vec![SourceId::Scloud, SourceId::ScloudMirror],
            page_size: 5,
            timeout_seconds: 10,
            cache_ttl_seconds: 3600,
            cache_capacity: 100,
            user_agent: None,
            allowed_chats: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `sources` must not be empty
    /// - `page_size` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `cache_capacity` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config("page_size must be greater than 0".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SearchError::Config(
                "cache_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Whether a chat id passes the static allow-list.
    ///
    /// An absent allow-list grants access to everyone.
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        match &self.allowed_chats {
            Some(ids) => ids.contains(&chat_id),
            None => true,
        }
    }
}
