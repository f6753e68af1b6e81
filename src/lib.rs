//! # reel-search
//!
//! Embedded listing-site search for chat bots: query one or more upstream
//! content-listing sites, cache results against repeated identical queries,
//! page them into a bounded menu, and resolve a final download link when an
//! item is selected.
//!
//! ## Design
//!
//! - Sources are tried in priority order; the first non-empty result wins
//! - Per-site markup rules are pluggable extractors behind a stable trait
//! - In-memory LRU cache with TTL; empty results are never cached
//! - Per-chat sessions tie menus to cached results, with generation-based
//!   last-write-wins when searches race
//! - Every network and parse failure becomes a typed outcome; distinct
//!   failures stay distinct to the boundary for distinct user messaging
//!
//! ## Scope
//!
//! This is a library, not a server: chat transports, keyboards, webhook
//! plumbing, and config loading live in the embedding process. Search
//! queries are logged only at trace level.

pub mod cache;
pub mod config;
pub mod error;
pub mod extractors;
pub mod http;
pub mod orchestrator;
pub mod page;
pub mod query_filter;
pub mod resolve;
pub mod session;
pub mod source;
pub mod types;

pub use cache::{normalize_key, SearchCache};
pub use config::SearchConfig;
pub use error::{ResolveError, Result, SearchError, SelectionError, SessionError};
pub use orchestrator::SearchOrchestrator;
pub use page::{page, Page};
pub use query_filter::is_probable_query;
pub use session::SessionStore;
pub use source::{sources_for, Extractor, Source, SourceDescriptor};
pub use types::{Download, ResultRecord, SourceId};

/// The full pipeline behind the three inbound chat events: a text query,
/// a page-navigation callback, and an item selection.
///
/// One instance is shared across all chats; sessions and the result cache
/// are keyed internally. Everything is in-memory; after a restart,
/// pagination and selection callbacks report [`SessionError::Stale`] and
/// the user simply searches again.
pub struct ReelSearch {
    config: SearchConfig,
    orchestrator: SearchOrchestrator,
    sessions: SessionStore,
}

impl ReelSearch {
    /// Build the pipeline from configuration with the default sources.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] or [`SearchError::Http`] if the
    /// configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let orchestrator = SearchOrchestrator::new(&config)?;
        Ok(Self::assemble(config, orchestrator))
    }

    /// Build the pipeline with an explicit source list in priority order.
    ///
    /// # Errors
    ///
    /// Same as [`ReelSearch::new`].
    pub fn with_sources(config: SearchConfig, sources: Vec<Source>) -> Result<Self> {
        let orchestrator = SearchOrchestrator::with_sources(&config, sources)?;
        Ok(Self::assemble(config, orchestrator))
    }

    fn assemble(config: SearchConfig, orchestrator: SearchOrchestrator) -> Self {
        let sessions = SessionStore::new(config.cache_ttl_seconds, 10_000);
        Self {
            config,
            orchestrator,
            sessions,
        }
    }

    /// Whether a chat id passes the configured static allow-list.
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.config.is_allowed(chat_id)
    }

    /// Handle a user query: search, store the session, return page 0.
    ///
    /// A [`Page`] with `total == 0` is the "no results" outcome. In that
    /// case the chat's previous session (if any) is left intact, so an
    /// older menu keeps working. If a newer search for the same chat
    /// commits while this one is still fetching, this result is dropped
    /// rather than overwriting the newer session.
    pub async fn search(&self, chat_id: i64, text: &str) -> Page {
        let generation = self.sessions.begin_search();
        let records = self.orchestrator.search(text).await;

        if !records.is_empty() {
            let key = normalize_key(text);
            self.sessions.commit(chat_id, generation, key).await;
        }

        page(&records, 0, self.config.page_size)
    }

    /// Handle a page-navigation callback against the chat's active search.
    ///
    /// Re-slices the cached list; no network traffic. An out-of-range page
    /// index yields an empty page, not an error.
    ///
    /// # Errors
    ///
    /// [`SessionError::Stale`] if the chat has no active search or its
    /// cached results expired or were evicted.
    pub async fn page(&self, chat_id: i64, page_index: usize) -> std::result::Result<Page, SessionError> {
        let records = self.session_records(chat_id).await?;
        Ok(page(&records, page_index, self.config.page_size))
    }

    /// Handle an item selection: look up the record and resolve its
    /// download link.
    ///
    /// # Errors
    ///
    /// [`SessionError::Stale`] / [`SessionError::OutOfRange`] if the
    /// session reference no longer matches the cached list, or a
    /// [`ResolveError`] from the second-stage fetch. Each variant needs
    /// its own user-facing message.
    pub async fn select(
        &self,
        chat_id: i64,
        index: usize,
    ) -> std::result::Result<Download, SelectionError> {
        let records = self.session_records(chat_id).await?;
        let record = records.get(index).ok_or(SessionError::OutOfRange {
            index,
            len: records.len(),
        })?;

        Ok(self.orchestrator.resolve(record).await?)
    }

    /// Drop a chat's session, e.g. on a `/start` command.
    pub async fn reset(&self, chat_id: i64) {
        self.sessions.clear(chat_id).await;
    }

    /// Configured page size, for transports that render navigation.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// The cached record list the chat's session points at, or `Stale`.
    async fn session_records(
        &self,
        chat_id: i64,
    ) -> std::result::Result<Vec<ResultRecord>, SessionError> {
        let state = self.sessions.get(chat_id).await.ok_or(SessionError::Stale)?;
        self.orchestrator
            .cache()
            .get(&state.query_key)
            .ok_or(SessionError::Stale)
    }
}
