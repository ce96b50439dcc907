use super::*;
use crate::fixtures;
use crate::store::MemoryStore;

// =============================================================================
// load / save
// =============================================================================

#[tokio::test]
async fn load_from_empty_store_yields_defaults() {
    let store = MemoryStore::new();
    let state = SessionState::load(&store).await.unwrap();
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
}

#[tokio::test]
async fn save_then_load_round_trips_exactly() {
    let store = MemoryStore::new();
    let state = SessionState::signed_in(fixtures::demo_user());
    state.save(&store).await.unwrap();

    let restored = SessionState::load(&store).await.unwrap();
    assert_eq!(restored, state);
}

#[tokio::test]
async fn save_uses_the_single_storage_key() {
    let store = MemoryStore::new();
    SessionState::default().save(&store).await.unwrap();
    assert!(store.get(STORAGE_KEY).await.is_some());
}

#[tokio::test]
async fn snapshot_serializes_camel_case_fields() {
    let store = MemoryStore::new();
    SessionState::signed_in(fixtures::demo_user()).save(&store).await.unwrap();

    let raw = store.get(STORAGE_KEY).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["isAuthenticated"], true);
    assert_eq!(json["currentUser"]["displayName"], "Demo User");
}

#[tokio::test]
async fn load_corrupt_snapshot_is_a_decode_error() {
    let store = MemoryStore::new();
    store.set(STORAGE_KEY, "not json".into()).await;
    let err = SessionState::load(&store).await.unwrap_err();
    assert!(matches!(err, crate::error::GraphError::SessionDecode(_)));
}

// =============================================================================
// require_authenticated
// =============================================================================

#[test]
fn default_state_is_unauthorized() {
    let err = SessionState::default().require_authenticated().unwrap_err();
    assert!(matches!(err, crate::error::GraphError::Unauthorized));
}

#[test]
fn signed_in_state_passes_the_gate() {
    let state = SessionState::signed_in(fixtures::demo_user());
    assert!(state.require_authenticated().is_ok());
}
