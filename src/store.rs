//! Session-scoped key/value storage.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` mirrors the per-tab string storage the demo persists into:
//! whole values are replaced atomically and everything vanishes when the
//! store is dropped. The trait is the seam for alternative backends; the
//! bundled `MemoryStore` is all the simulator needs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// String storage scoped to one simulated browser session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String);

    /// Drop the value stored under `key`.
    async fn remove(&self, key: &str);
}

/// In-memory store standing in for per-tab session storage.
///
/// Clones share the same backing map, the way every page of a tab shares one
/// storage area. Dropping the last clone ends the "session".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.lock().await.insert(key.to_owned(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
