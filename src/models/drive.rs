//! Drive resources: items with their folder/file facets.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Folder facet. Present iff the item is a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderFacet {
    pub child_count: u32,
}

/// File facet. Present iff the item is a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFacet {
    pub mime_type: String,
}

/// Wrapper Graph uses for item authorship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySet {
    pub user: Identity,
}

/// A named actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub display_name: String,
}

impl IdentitySet {
    #[must_use]
    pub fn user(display_name: impl Into<String>) -> Self {
        Self { user: Identity { display_name: display_name.into() } }
    }
}

/// An item as returned by `/me/drive/root/children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileFacet>,
    pub size: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified_date_time: OffsetDateTime,
    pub web_url: String,
    pub created_by: IdentitySet,
}

impl DriveItem {
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.folder.is_some()
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.file.is_some()
    }
}
