//! In-memory session store backed by a concurrent map.
//!
//! State lives for the lifetime of the process. Readers get clones, so a
//! caller holding a `Session` never observes later writes.

use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use goshmind_core::chat::store::SessionStore;
use goshmind_types::chat::{Session, Turn};
use goshmind_types::error::StoreError;

/// [`SessionStore`] keeping every session in a `DashMap`.
///
/// Cloning is cheap and shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).map(|s| s.value().clone())
    }

    async fn create(&self, session_id: &str) -> Result<Session, StoreError> {
        match self.sessions.entry(session_id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(session_id.to_string())),
            Entry::Vacant(slot) => {
                let session = Session::new(session_id);
                slot.insert(session.clone());
                Ok(session)
            }
        }
    }

    async fn replace_messages(
        &self,
        session_id: &str,
        messages: Vec<Turn>,
    ) -> Result<Session, StoreError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::NotFound(session_id.to_string()))?;
        session.messages = messages;
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    async fn count(&self) -> usize {
        self.sessions.len()
    }
}
