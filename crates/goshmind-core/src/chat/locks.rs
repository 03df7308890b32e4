//! Per-session mutual exclusion for chat exchanges.
//!
//! An exchange is a read-modify-write over one session's history with an
//! upstream call in the middle. Holding the session's lock for the whole
//! exchange keeps two concurrent requests for the same session from
//! overwriting each other's turns. Distinct sessions never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of async mutexes keyed by session id.
///
/// Cloning produces a shared view of the same registry (backed by `Arc`).
/// The `DashMap` guard is released before awaiting the mutex.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    inner: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `session_id`.
    ///
    /// The returned guard releases the lock when dropped, including when the
    /// owning request future is cancelled.
    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(
            self.inner
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value(),
        );
        lock.lock_owned().await
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}
