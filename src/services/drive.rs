//! Drive operations: listing, upload, download.
//!
//! DESIGN
//! ======
//! Listing mirrors the upstream path split: `"root"` hits
//! `drive/root/children`, any other folder addresses
//! `drive/root:/{name}:/children`. Only the fixture folder exists, and it
//! reports empty — child fixtures stop at the root level.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::GraphError;
use crate::fixtures;
use crate::graph::MockGraph;
use crate::models::drive::{DriveItem, FileFacet, IdentitySet};
use crate::models::Collection;
use crate::session::SessionState;
use crate::store::SessionStore;

/// Root listing, or the (empty) contents of a known fixture folder.
pub async fn get_files<S: SessionStore>(
    graph: &MockGraph<S>,
    folder: &str,
) -> Result<Collection<DriveItem>, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    let items = fixtures::files(OffsetDateTime::now_utc());
    let (resource, value) = if folder == "root" {
        ("drive/root/children".to_owned(), items)
    } else if items.iter().any(|item| item.name == folder && item.is_folder()) {
        (format!("drive/root:/{folder}:/children"), Vec::new())
    } else {
        return Err(GraphError::NotFound { id: folder.to_owned() });
    };
    debug!(folder, count = value.len(), "serving mock drive listing");

    Ok(Collection { odata_context: fixtures::odata_context(&resource), value })
}

/// Accept an upload and describe it as a drive item. Nothing is retained.
pub async fn upload_file<S: SessionStore>(
    graph: &MockGraph<S>,
    name: &str,
    content: &[u8],
) -> Result<DriveItem, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    if name.is_empty() {
        return Err(GraphError::InvalidRequest("file name must not be empty".to_owned()));
    }

    let owner = state
        .current_user
        .map(|user| user.display_name)
        .ok_or(GraphError::Unauthorized)?;

    let item = DriveItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_owned(),
        folder: None,
        file: Some(FileFacet { mime_type: mime_for(name).to_owned() }),
        size: content.len() as u64,
        last_modified_date_time: OffsetDateTime::now_utc(),
        web_url: "https://onedrive.live.com/...".to_owned(),
        created_by: IdentitySet::user(owner),
    };
    info!(name, size = item.size, "mock upload accepted");

    Ok(item)
}

/// Synthetic bytes for a fixture file. Folders and unknown ids fail.
pub async fn download_file<S: SessionStore>(graph: &MockGraph<S>, id: &str) -> Result<Vec<u8>, GraphError> {
    graph.latency.simulate().await;

    let state = SessionState::load(&graph.store).await?;
    state.require_authenticated()?;

    fixtures::files(OffsetDateTime::now_utc())
        .iter()
        .find(|item| item.id == id && item.is_file())
        .map(fixtures::file_bytes)
        .ok_or_else(|| GraphError::NotFound { id: id.to_owned() })
}

/// Content type by extension, covering what the demo drive holds.
fn mime_for(name: &str) -> &'static str {
    match name.rsplit('.').next() {
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("png") => "image/png",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[path = "drive_test.rs"]
mod tests;
