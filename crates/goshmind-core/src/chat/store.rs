//! SessionStore trait definition.
//!
//! The relay never touches session records directly; every read and write
//! goes through this port so the in-memory map can be swapped for a
//! persistent backend without changing `ChatRelay`.

use std::future::Future;

use goshmind_types::chat::{Session, Turn};
use goshmind_types::error::StoreError;

/// Keyed storage of conversation sessions.
///
/// Implementations live in goshmind-infra (e.g., `InMemorySessionStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionStore: Send + Sync {
    /// Look up a session. Absence is not an error.
    fn get(&self, session_id: &str) -> impl Future<Output = Option<Session>> + Send;

    /// Create an empty session stamped with the current time.
    ///
    /// Fails with [`StoreError::Duplicate`] if the id is already taken.
    fn create(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<Session, StoreError>> + Send;

    /// Overwrite the whole message sequence and bump `updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] if the session does not exist.
    fn replace_messages(
        &self,
        session_id: &str,
        messages: Vec<Turn>,
    ) -> impl Future<Output = Result<Session, StoreError>> + Send;

    /// Number of sessions currently held.
    fn count(&self) -> impl Future<Output = usize> + Send;
}
