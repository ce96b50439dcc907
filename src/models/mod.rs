//! Graph resource models.
//!
//! DESIGN
//! ======
//! Field names and nesting reproduce the Microsoft Graph v1.0 schema exactly
//! (camelCase, `@odata.context` envelope, facet objects), because demo
//! consumers are written against that shape. Timestamps serialize as
//! RFC 3339 strings.

pub mod calendar;
pub mod drive;
pub mod mail;
pub mod user;

use serde::{Deserialize, Serialize};

/// Graph collection envelope: `@odata.context` plus the `value` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(rename = "@odata.context")]
    pub odata_context: String,
    pub value: Vec<T>,
}

/// A display name / address pair, nested under recipient wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub name: String,
    pub address: String,
}

/// Graph wraps every address in an `emailAddress` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

impl Recipient {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self { email_address: EmailAddress { name: name.into(), address: address.into() } }
    }
}
