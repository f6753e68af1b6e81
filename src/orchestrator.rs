//! Search orchestration: cache lookup, priority-order source fallback,
//! write-through caching.
//!
//! Sources are tried strictly in configured order. A source that fails to
//! fetch is logged and skipped; a source that parses to zero records falls
//! through to the next. The first non-empty list wins and is cached. Empty
//! outcomes are never cached, so a later identical query re-attempts every
//! source once upstream recovers.

use crate::cache::{normalize_key, SearchCache};
use crate::config::SearchConfig;
use crate::error::{ResolveError, SearchError};
use crate::http;
use crate::resolve;
use crate::source::{sources_for, Source};
use crate::types::{Download, ResultRecord, SourceId};
use std::time::Duration;

/// Drives fetch → extract across the configured sources and owns the
/// shared result cache and HTTP client.
pub struct SearchOrchestrator {
    client: reqwest::Client,
    sources: Vec<Source>,
    cache: SearchCache,
}

impl SearchOrchestrator {
    /// Build an orchestrator from configuration, using the default source
    /// registry for the configured source ids.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration or
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let sources = sources_for(&config.sources);
        Self::with_sources(config, sources)
    }

    /// Build an orchestrator with an explicit source list, in priority
    /// order. Useful for custom mirrors and for tests pointing sources at
    /// a local server.
    ///
    /// # Errors
    ///
    /// Same as [`SearchOrchestrator::new`].
    pub fn with_sources(config: &SearchConfig, sources: Vec<Source>) -> Result<Self, SearchError> {
        config.validate()?;
        if sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }

        Ok(Self {
            client: http::build_client(config)?,
            sources,
            cache: SearchCache::new(
                config.cache_capacity,
                Duration::from_secs(config.cache_ttl_seconds),
            ),
        })
    }

    /// Run a search: cache hit short-circuits with zero network calls,
    /// otherwise sources are tried in priority order.
    ///
    /// An empty list means every source failed or returned nothing: a
    /// valid "no results" outcome, not an error. At most one cache write
    /// happens, and only for a non-empty list.
    pub async fn search(&self, query: &str) -> Vec<ResultRecord> {
        let key = normalize_key(query);

        if let Some(records) = self.cache.get(&key) {
            tracing::debug!(key = %key, count = records.len(), "cache hit");
            return records;
        }

        for source in &self.sources {
            let url = source.descriptor.search_url(query.trim());
            tracing::trace!(source = %source.descriptor.id, %url, "querying source");

            let html = match http::fetch_html(&self.client, &url).await {
                Ok(html) => html,
                Err(err) => {
                    tracing::warn!(
                        source = %source.descriptor.id,
                        error = %err,
                        "source fetch failed, trying next"
                    );
                    continue;
                }
            };

            let records = source.extractor.extract_results(&html, &source.descriptor);
            if records.is_empty() {
                tracing::debug!(source = %source.descriptor.id, "source returned no results");
                continue;
            }

            self.cache.put(&key, records.clone());
            return records;
        }

        tracing::debug!(key = %key, "no source yielded results");
        Vec::new()
    }

    /// Resolve a previously returned record to its final download link.
    ///
    /// Delegates to [`resolve::resolve_download`] with the record's source.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotFound`] if the detail page has no qualifying
    /// anchor, [`ResolveError::Fetch`] if the detail fetch fails.
    pub async fn resolve(&self, record: &ResultRecord) -> Result<Download, ResolveError> {
        let source = self
            .source(record.source)
            .ok_or_else(|| ResolveError::Fetch(format!("source not configured: {}", record.source)))?;
        resolve::resolve_download(&self.client, source, record).await
    }

    /// The configured source with the given id, if any.
    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.descriptor.id == id)
    }

    /// Shared result cache (for pagination/selection lookups).
    pub(crate) fn cache(&self) -> &SearchCache {
        &self.cache
    }
}
