//! Session store port and its in-memory implementation.
//!
//! Route logic depends only on the trait, so the process-local map can be
//! swapped for a persisted or shared store without touching handlers. The
//! in-memory store accepts that a process restart invalidates every session
//! (single-process deployment assumption); unlike the map it replaces, it
//! does enforce a server-side expiry deadline per token.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::domain::UserId;

/// Token length in bytes before hex encoding. 256 bits of entropy.
const TOKEN_LEN: usize = 32;

/// Default server-side session lifetime.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Opaque session credential handed to the browser as a cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh token from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a raw cookie value for lookup. No validation: unknown values
    /// simply resolve to no identity.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Cookie-safe string form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Port for session token issuance, lookup, and invalidation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issue a fresh token bound to `user`.
    async fn create(&self, user: UserId) -> SessionToken;

    /// Resolve a token to its user, or `None` for unknown, destroyed, or
    /// expired tokens. Never an error: callers redirect to login.
    async fn resolve(&self, token: &SessionToken) -> Option<UserId>;

    /// Invalidate a token. Unknown tokens are a no-op.
    async fn destroy(&self, token: &SessionToken);
}

struct SessionEntry {
    user: UserId,
    expires_at: Instant,
}

/// Concurrency-safe process-local session store.
pub struct InMemorySessionStore {
    ttl: Duration,
    entries: RwLock<HashMap<String, SessionEntry>>,
}

impl InMemorySessionStore {
    /// Create a store with [`DEFAULT_SESSION_TTL`].
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    /// Create a store whose tokens expire `ttl` after issuance.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn purge_expired(entries: &mut HashMap<String, SessionEntry>, now: Instant) {
        entries.retain(|_, entry| entry.expires_at > now);
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user: UserId) -> SessionToken {
        let token = SessionToken::generate();
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        Self::purge_expired(&mut entries, now);
        entries.insert(
            token.as_str().to_owned(),
            SessionEntry {
                user,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    async fn resolve(&self, token: &SessionToken) -> Option<UserId> {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.get(token.as_str()) {
            Some(entry) if entry.expires_at > now => Some(entry.user),
            Some(_) => {
                entries.remove(token.as_str());
                None
            }
            None => None,
        }
    }

    async fn destroy(&self, token: &SessionToken) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(token.as_str());
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn create_resolve_destroy_lifecycle() {
        let store = InMemorySessionStore::new();
        let user = UserId::new(7);

        let token = store.create(user).await;
        assert_eq!(store.resolve(&token).await, Some(user));

        store.destroy(&token).await;
        assert_eq!(store.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_no_identity() {
        let store = InMemorySessionStore::new();
        let token = SessionToken::from_raw("not-a-real-token");
        assert_eq!(store.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn expired_token_resolves_to_no_identity() {
        let store = InMemorySessionStore::with_ttl(Duration::ZERO);
        let token = store.create(UserId::new(7)).await;
        assert_eq!(store.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn destroy_unknown_token_is_noop() {
        let store = InMemorySessionStore::new();
        let user = UserId::new(1);
        let kept = store.create(user).await;

        store.destroy(&SessionToken::from_raw("missing")).await;
        assert_eq!(store.resolve(&kept).await, Some(user));
    }

    #[tokio::test]
    async fn tokens_are_distinct_and_long() {
        let store = InMemorySessionStore::new();
        let a = store.create(UserId::new(1)).await;
        let b = store.create(UserId::new(1)).await;
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), TOKEN_LEN * 2);
    }

    #[tokio::test]
    async fn sessions_track_their_own_user() {
        let store = InMemorySessionStore::new();
        let alice = store.create(UserId::new(1)).await;
        let bob = store.create(UserId::new(2)).await;
        assert_eq!(store.resolve(&alice).await, Some(UserId::new(1)));
        assert_eq!(store.resolve(&bob).await, Some(UserId::new(2)));
    }
}
