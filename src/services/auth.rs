//! Sign-in and sign-out against the mock identity provider.
//!
//! DESIGN
//! ======
//! Mirrors the shape of an MSAL popup flow without any of its moving parts:
//! login always succeeds, hands back a canned token bundle, and persists the
//! signed-in snapshot; logout always clears. Both transitions rewrite the
//! whole snapshot, so state is binary by construction.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::error::GraphError;
use crate::fixtures;
use crate::graph::MockGraph;
use crate::models::user::UserProfile;
use crate::session::SessionState;
use crate::store::SessionStore;

/// How long the mock token claims to live.
pub const TOKEN_LIFETIME: Duration = Duration::hours(1);

/// What a completed sign-in hands back: token, account, expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub access_token: String,
    pub account: UserProfile,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_on: OffsetDateTime,
}

/// Bundle for `account`, expiring exactly [`TOKEN_LIFETIME`] after `now`.
#[must_use]
pub fn token_bundle(account: UserProfile, now: OffsetDateTime) -> TokenBundle {
    TokenBundle {
        access_token: fixtures::MOCK_ACCESS_TOKEN.to_owned(),
        account,
        expires_on: now + TOKEN_LIFETIME,
    }
}

/// Sign the demo user in. Unconditional success after the configured latency.
pub async fn login<S: SessionStore>(graph: &MockGraph<S>) -> Result<TokenBundle, GraphError> {
    graph.latency.simulate().await;

    let user = fixtures::demo_user();
    SessionState::signed_in(user.clone()).save(&graph.store).await?;
    info!(user = %user.user_principal_name, "mock sign-in complete");

    Ok(token_bundle(user, OffsetDateTime::now_utc()))
}

/// Sign out, clearing the authenticated flag and the stored profile.
pub async fn logout<S: SessionStore>(graph: &MockGraph<S>) -> Result<(), GraphError> {
    graph.latency.simulate().await;

    SessionState::default().save(&graph.store).await?;
    info!("mock sign-out complete");
    Ok(())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
