//! Error types for the reel-search crate.
//!
//! Every network or parse failure is caught at its origin and converted
//! into one of these typed outcomes; nothing here wraps a panic. Messages
//! are stable strings suitable for display and for mapping to distinct
//! user-facing recovery text.

/// Errors that can occur while running a search.
///
/// A fetch failure for a *single* source is recovered internally by the
/// orchestrator (it falls through to the next source); `Http` only reaches
/// callers from operations that have no fallback left.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request failed: network error, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Errors from resolving a selected result to its final download link.
///
/// The two variants require different user-facing messaging and must stay
/// distinct all the way to the boundary: `NotFound` means "try another
/// result", `Fetch` means "transient, retry later".
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The detail page loaded but contained no qualifying download anchor.
    #[error("no download link found on the detail page")]
    NotFound,

    /// The detail-page fetch itself failed (timeout, network, non-2xx).
    #[error("failed to fetch detail page: {0}")]
    Fetch(String),
}

/// Errors from paginating or selecting against a stored session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session has no active search, or its cached results have
    /// expired or been evicted. The caller should prompt a new search.
    #[error("search results are no longer available, please search again")]
    Stale,

    /// The selection index does not point into the cached result list.
    #[error("selection {index} out of range ({len} results)")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the cached result list.
        len: usize,
    },
}

/// Boundary error for a selection request: either the session reference
/// went stale or the second-stage resolution failed. Kept as a transparent
/// union so transports can match on the inner taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Stale or out-of-range session reference.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Download-link resolution failure.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Convenience type alias for reel-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
