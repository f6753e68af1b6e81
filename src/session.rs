//! Per-chat session state tying menus to their cached result list.
//!
//! Each chat has at most one active search session: the normalized query
//! key whose cache entry backs its pagination and selection callbacks.
//! Sessions live in a moka cache with TTL matching the result cache, so a
//! session can never claim a query key longer than the results it points
//! at could stay cached.
//!
//! Searches carry a generation number allocated before the network phase.
//! A slow in-flight search that finishes after a newer one committed must
//! not clobber the newer session (last-write-wins by generation); the
//! newer menu keeps working, the stale result is dropped.

use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Active search state for one chat.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Normalized query key into the result cache.
    pub query_key: String,
    /// Generation of the search that produced this state.
    pub generation: u64,
}

/// Session store keyed by chat id, bounded and TTL-expired.
pub struct SessionStore {
    sessions: Cache<i64, SessionState>,
    generation: AtomicU64,
}

impl SessionStore {
    /// Create a session store.
    ///
    /// `ttl_secs` should match the result cache TTL; `max_capacity` bounds
    /// the number of concurrently tracked chats.
    pub fn new(ttl_secs: u64, max_capacity: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            sessions,
            generation: AtomicU64::new(0),
        }
    }

    /// Allocate the generation for a search that is about to start.
    ///
    /// Call before the network phase; pass the value to [`commit`] once
    /// results are in.
    ///
    /// [`commit`]: SessionStore::commit
    pub fn begin_search(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Store the session for a finished search, unless a newer search for
    /// the same chat already committed.
    ///
    /// Returns `true` if the session was stored, `false` if it lost to a
    /// newer generation and was dropped.
    pub async fn commit(&self, chat_id: i64, generation: u64, query_key: String) -> bool {
        if let Some(current) = self.sessions.get(&chat_id).await {
            if current.generation > generation {
                tracing::debug!(
                    chat_id,
                    stale = generation,
                    current = current.generation,
                    "dropping stale search result"
                );
                return false;
            }
        }

        self.sessions
            .insert(
                chat_id,
                SessionState {
                    query_key,
                    generation,
                },
            )
            .await;
        true
    }

    /// The active session for a chat, if one exists and has not expired.
    pub async fn get(&self, chat_id: i64) -> Option<SessionState> {
        self.sessions.get(&chat_id).await
    }

    /// Drop a chat's session explicitly.
    pub async fn clear(&self, chat_id: i64) {
        self.sessions.invalidate(&chat_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(3600, 10_000)
    }

    #[tokio::test]
    async fn generations_are_monotonic() {
        let store = store();
        let g1 = store.begin_search();
        let g2 = store.begin_search();
        assert!(g2 > g1);
    }

    #[tokio::test]
    async fn commit_then_get_round_trips() {
        let store = store();
        let g = store.begin_search();
        assert!(store.commit(7, g, "inception".into()).await);

        let state = store.get(7).await.expect("session should exist");
        assert_eq!(state.query_key, "inception");
        assert_eq!(state.generation, g);
    }

    #[tokio::test]
    async fn stale_generation_does_not_overwrite_newer() {
        let store = store();
        let slow = store.begin_search();
        let fast = store.begin_search();

        // The later search finishes first.
        assert!(store.commit(7, fast, "tenet".into()).await);
        // The earlier search finishes late and must lose.
        assert!(!store.commit(7, slow, "inception".into()).await);

        let state = store.get(7).await.expect("session should exist");
        assert_eq!(state.query_key, "tenet");
    }

    #[tokio::test]
    async fn newer_generation_replaces_older() {
        let store = store();
        let g1 = store.begin_search();
        assert!(store.commit(7, g1, "inception".into()).await);

        let g2 = store.begin_search();
        assert!(store.commit(7, g2, "tenet".into()).await);

        let state = store.get(7).await.expect("session should exist");
        assert_eq!(state.query_key, "tenet");
    }

    #[tokio::test]
    async fn chats_are_independent() {
        let store = store();
        let g1 = store.begin_search();
        let g2 = store.begin_search();
        store.commit(1, g1, "inception".into()).await;
        store.commit(2, g2, "tenet".into()).await;

        assert_eq!(store.get(1).await.expect("chat 1").query_key, "inception");
        assert_eq!(store.get(2).await.expect("chat 2").query_key, "tenet");
    }

    #[tokio::test]
    async fn clear_removes_session() {
        let store = store();
        let g = store.begin_search();
        store.commit(7, g, "inception".into()).await;
        store.clear(7).await;
        assert!(store.get(7).await.is_none());
    }

    #[tokio::test]
    async fn missing_session_is_none() {
        let store = store();
        assert!(store.get(404).await.is_none());
    }
}
