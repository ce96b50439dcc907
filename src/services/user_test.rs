use super::*;
use crate::fixtures;
use crate::graph::test_helpers::*;
use crate::session::STORAGE_KEY;
use crate::store::SessionStore as _;

// =============================================================================
// get_me
// =============================================================================

#[tokio::test]
async fn unauthenticated_profile_read_is_unauthorized() {
    let graph = test_graph();
    let err = get_me(&graph).await.unwrap_err();
    assert!(matches!(err, GraphError::Unauthorized));
}

#[tokio::test]
async fn signed_in_profile_read_returns_the_fixture() {
    let graph = signed_in_graph().await;
    let me = get_me(&graph).await.unwrap();
    assert_eq!(me, fixtures::demo_user());
}

#[tokio::test]
async fn authenticated_flag_without_user_is_unauthorized() {
    // A snapshot only tampering could produce: flag set, profile missing.
    let graph = test_graph();
    graph.store.set(STORAGE_KEY, r#"{"isAuthenticated":true,"currentUser":null}"#.into()).await;

    let err = get_me(&graph).await.unwrap_err();
    assert!(matches!(err, GraphError::Unauthorized));
}
