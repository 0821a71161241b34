//! Session storage. One isolated `SessionState` per session id, kept in memory
//! until the session is deleted or sits idle past the eviction window.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AetherisError;
use crate::session::SessionState;

/// A stored session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: SessionState,
}

impl Session {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            state,
        }
    }
}

/// A state change applied to one session while the store holds it exclusively
pub type Transition = Box<dyn FnOnce(&mut SessionState) -> Result<(), AetherisError> + Send>;

/// Trait for storing and retrieving sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: Session) -> Result<(), AetherisError>;
    async fn get(&self, id: Uuid) -> Result<Option<Session>, AetherisError>;
    async fn delete(&self, id: Uuid) -> Result<bool, AetherisError>;

    /// Apply `transition` to a live session atomically and return the new state.
    /// A failed transition leaves the stored state unchanged; a missing or
    /// deleted session yields `SessionNotFound` and is never recreated.
    async fn update(&self, id: Uuid, transition: Transition) -> Result<SessionState, AetherisError>;

    /// Drop sessions not updated within `max_idle`, returning how many went
    async fn evict_idle(&self, max_idle: Duration) -> Result<usize, AetherisError>;

    /// Fetch a session or fail with `SessionNotFound`
    async fn require(&self, id: Uuid) -> Result<Session, AetherisError> {
        self.get(id)
            .await?
            .ok_or(AetherisError::SessionNotFound { id })
    }
}

/// In-memory implementation of `SessionStore`
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, mut session: Session) -> Result<(), AetherisError> {
        session.updated_at = Utc::now();
        self.sessions.insert(session.id, session);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Session>, AetherisError> {
        Ok(self.sessions.get(&id).map(|entry| entry.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AetherisError> {
        Ok(self.sessions.remove(&id).is_some())
    }

    async fn update(&self, id: Uuid, transition: Transition) -> Result<SessionState, AetherisError> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(AetherisError::SessionNotFound { id })?;

        let mut state = entry.state.clone();
        transition(&mut state)?;
        entry.state = state.clone();
        entry.updated_at = Utc::now();
        Ok(state)
    }

    async fn evict_idle(&self, max_idle: Duration) -> Result<usize, AetherisError> {
        let max_idle = TimeDelta::from_std(max_idle).unwrap_or(TimeDelta::MAX);
        let cutoff = Utc::now()
            .checked_sub_signed(max_idle)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.updated_at > cutoff);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::info!("Evicted {} idle sessions", evicted);
        }
        Ok(evicted)
    }
}
