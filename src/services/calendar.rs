//! Calendar operations: list and create.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::GraphError;
use crate::fixtures;
use crate::graph::MockGraph;
use crate::models::calendar::{Attendee, CreateEventRequest, DateTimeTimeZone, Event, Location};
use crate::models::{Collection, EmailAddress, Recipient};
use crate::session::SessionState;
use crate::store::SessionStore;

/// Default `$top` page size, matching the upstream service.
pub const DEFAULT_TOP: usize = 10;

/// Calendar listing, truncated to `top` events.
pub async fn get_events<S: SessionStore>(
    graph: &MockGraph<S>,
    top: usize,
) -> Result<Collection<Event>, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    let mut value = fixtures::events(OffsetDateTime::now_utc());
    value.truncate(top);
    debug!(count = value.len(), "serving mock events");

    Ok(Collection { odata_context: fixtures::odata_context("events"), value })
}

/// Create an event from the request, echoing it back with a generated id.
///
/// The event is not retained: like the rest of the simulator, the calendar
/// regenerates from fixtures on every listing.
pub async fn create_event<S: SessionStore>(
    graph: &MockGraph<S>,
    request: &CreateEventRequest,
) -> Result<Event, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    if request.end_time <= request.start_time {
        return Err(GraphError::InvalidRequest("event end must be after start".to_owned()));
    }

    let organizer = state
        .current_user
        .map(|user| Recipient::new(user.display_name, user.mail))
        .ok_or(GraphError::Unauthorized)?;

    let attendees = request
        .attendees
        .iter()
        .map(|address| Attendee {
            kind: "required".to_owned(),
            email_address: EmailAddress { name: String::new(), address: address.clone() },
        })
        .collect();

    let event = Event {
        id: Uuid::new_v4().to_string(),
        subject: request.subject.clone(),
        body_preview: request.body.clone().unwrap_or_default(),
        start: DateTimeTimeZone::utc(request.start_time),
        end: DateTimeTimeZone::utc(request.end_time),
        location: Location { display_name: request.location.clone().unwrap_or_default() },
        organizer,
        attendees,
        is_online_meeting: false,
        online_meeting_provider: None,
    };
    info!(subject = %event.subject, "mock event created");

    Ok(event)
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod tests;
