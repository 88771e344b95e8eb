use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

use crate::model::identity::Identity;

/// Storage for signed-in identities, keyed by session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> Option<Identity>;
    async fn save(&self, session_id: &str, identity: Identity);
    async fn clear(&self, session_id: &str);
}

/// In-memory sessions. An entry lives until it is cleared or has been idle
/// for the configured TTL.
pub struct MemorySessionStore {
    cache: Cache<String, Identity>,
}

impl MemorySessionStore {
    pub fn new(capacity: u64, idle_ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(idle_ttl)
                .build(),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> Option<Identity> {
        self.cache.get(session_id).await
    }

    async fn save(&self, session_id: &str, identity: Identity) {
        self.cache.insert(session_id.to_string(), identity).await;
    }

    async fn clear(&self, session_id: &str) {
        self.cache.invalidate(session_id).await;
    }
}

/// Single source of truth for who is signed in.
pub struct IdentityContext {
    store: Arc<dyn SessionStore>,
}

impl IdentityContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Stores `identity` under a fresh session id and returns the id.
    pub async fn sign_in(&self, identity: Identity) -> String {
        let session_id = Uuid::new_v4().to_string();
        debug!(user_id = %identity.user_id, "Opening session");
        self.store.save(&session_id, identity).await;
        session_id
    }

    pub async fn current(&self, session_id: &str) -> Option<Identity> {
        self.store.load(session_id).await
    }

    /// Drops the session if there is one. Safe to call repeatedly.
    pub async fn sign_out(&self, session_id: Option<&str>) {
        if let Some(session_id) = session_id {
            self.store.clear(session_id).await;
        }
    }
}
