//! Session state and its persistence edge.
//!
//! DESIGN
//! ======
//! The snapshot is restored at the start of every operation and written back
//! after every mutation — the same boundaries a page load and a storage
//! write give the original. State is a plain value; nothing holds it between
//! calls, so there is no global to reset.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;
use crate::models::user::UserProfile;
use crate::store::SessionStore;

/// Storage key for the serialized session snapshot.
pub const STORAGE_KEY: &str = "mock_graph_state";

/// The authenticated/user snapshot for one simulated browser session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_authenticated: bool,
    pub current_user: Option<UserProfile>,
}

impl SessionState {
    /// Signed-in snapshot for the given user.
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { is_authenticated: true, current_user: Some(user) }
    }

    /// Restore the last persisted snapshot, or defaults when none exists.
    pub async fn load(store: &impl SessionStore) -> Result<Self, GraphError> {
        match store.get(STORAGE_KEY).await {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Persist the full snapshot, replacing any previous one.
    pub async fn save(&self, store: &impl SessionStore) -> Result<(), GraphError> {
        let raw = serde_json::to_string(self)?;
        store.set(STORAGE_KEY, raw).await;
        debug!(authenticated = self.is_authenticated, "session snapshot persisted");
        Ok(())
    }

    /// Gate for data-returning operations.
    pub fn require_authenticated(&self) -> Result<(), GraphError> {
        if self.is_authenticated { Ok(()) } else { Err(GraphError::Unauthorized) }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
