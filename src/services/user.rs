//! The `/me` profile read.

use tracing::debug;

use crate::error::GraphError;
use crate::graph::MockGraph;
use crate::models::user::UserProfile;
use crate::session::SessionState;
use crate::store::SessionStore;

/// Current user's profile, straight from the session snapshot.
pub async fn get_me<S: SessionStore>(graph: &MockGraph<S>) -> Result<UserProfile, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;
    debug!("serving mock profile");

    // A signed-in snapshot always carries the user; a tampered one is
    // indistinguishable from being signed out.
    state.current_user.ok_or(GraphError::Unauthorized)
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
