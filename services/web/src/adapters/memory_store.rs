//! services/web/src/adapters/memory_store.rs
//!
//! An in-process implementation of the `SessionStore` port. Sessions live in a
//! map guarded by an async `RwLock` and expire after a sliding TTL.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fitflix_core::ports::{PortError, PortResult, SessionStore};
use fitflix_core::SessionContext;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

struct SessionRecord {
    context: SessionContext,
    expires_at: DateTime<Utc>,
}

/// A session store that keeps everything in memory. Sessions do not survive a
/// restart.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, SessionRecord>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Creates an empty store whose entries expire `ttl` after their last save.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn save_at(&self, token: Uuid, context: SessionContext, now: DateTime<Utc>) {
        let record = SessionRecord {
            context,
            expires_at: now + self.ttl,
        };
        self.sessions.write().await.insert(token, record);
    }

    async fn load_at(&self, token: Uuid, now: DateTime<Utc>) -> PortResult<SessionContext> {
        match self.sessions.read().await.get(&token) {
            Some(record) if record.expires_at > now => Ok(record.context.clone()),
            Some(_) => Err(PortError::NotFound(format!("session {} has expired", token))),
            None => Err(PortError::NotFound(format!("session {}", token))),
        }
    }

    async fn touch_at(&self, token: Uuid, now: DateTime<Utc>) -> PortResult<()> {
        match self.sessions.write().await.get_mut(&token) {
            Some(record) if record.expires_at > now => {
                record.expires_at = now + self.ttl;
                Ok(())
            }
            Some(_) => Err(PortError::NotFound(format!("session {} has expired", token))),
            None => Err(PortError::NotFound(format!("session {}", token))),
        }
    }

    async fn purge_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at > now);
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, token: Uuid) -> PortResult<SessionContext> {
        self.load_at(token, Utc::now()).await
    }

    async fn save(&self, token: Uuid, session: SessionContext) -> PortResult<()> {
        self.save_at(token, session, Utc::now()).await;
        Ok(())
    }

    async fn touch(&self, token: Uuid) -> PortResult<()> {
        self.touch_at(token, Utc::now()).await
    }

    async fn purge_expired(&self) -> PortResult<usize> {
        Ok(self.purge_at(Utc::now()).await)
    }
}
