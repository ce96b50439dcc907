//! Mail resources: messages and the send-mail request body.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Recipient;

/// Importance marker carried on each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

/// A message as returned by `/me/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified_date_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub received_date_time: OffsetDateTime,
    pub has_attachments: bool,
    pub subject: String,
    pub body_preview: String,
    pub importance: Importance,
    pub is_read: bool,
    /// Graph carries both `sender` and `from`; the demo fixtures keep them equal.
    pub sender: Recipient,
    pub from: Recipient,
}

/// Request body for the mock send-mail operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
    /// `"HTML"` or `"Text"`, matching the Graph body contentType values.
    pub content_type: String,
}

impl SendMessageRequest {
    /// HTML message to the given recipients, the common demo case.
    #[must_use]
    pub fn html(to: Vec<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self { to, subject: subject.into(), body: body.into(), content_type: "HTML".to_owned() }
    }
}
