//! Mail operations: list, single read, send.
//!
//! DESIGN
//! ======
//! Listing mimics `GET /me/messages?$top=N` over the three-message fixture
//! inbox; sending accepts the Graph send-mail body and acknowledges without
//! producing a payload. Nothing is ever stored — the inbox is regenerated
//! per call with fresh relative timestamps.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::GraphError;
use crate::fixtures;
use crate::graph::MockGraph;
use crate::models::mail::{Message, SendMessageRequest};
use crate::models::Collection;
use crate::session::SessionState;
use crate::store::SessionStore;

/// Default `$top` page size, matching the upstream service.
pub const DEFAULT_TOP: usize = 10;

/// Inbox listing, truncated to `top` messages.
pub async fn get_messages<S: SessionStore>(
    graph: &MockGraph<S>,
    top: usize,
) -> Result<Collection<Message>, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    let mut value = fixtures::messages(OffsetDateTime::now_utc());
    value.truncate(top);
    debug!(count = value.len(), "serving mock messages");

    Ok(Collection { odata_context: fixtures::odata_context("messages"), value })
}

/// Single message lookup by id.
pub async fn get_message<S: SessionStore>(graph: &MockGraph<S>, id: &str) -> Result<Message, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    fixtures::messages(OffsetDateTime::now_utc())
        .into_iter()
        .find(|message| message.id == id)
        .ok_or_else(|| GraphError::NotFound { id: id.to_owned() })
}

/// Accept a send-mail request. The message goes nowhere; the contract is the
/// validation and the acknowledgment.
pub async fn send_message<S: SessionStore>(
    graph: &MockGraph<S>,
    request: &SendMessageRequest,
) -> Result<(), GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    if request.to.is_empty() {
        return Err(GraphError::InvalidRequest("at least one recipient is required".to_owned()));
    }

    info!(recipients = request.to.len(), subject = %request.subject, "mock message accepted");
    Ok(())
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
