use super::*;

fn spy() -> ScrollSpy {
    ScrollSpy::new(["health", "finance", "retail"])
}

fn seen(section_id: &str) -> Intersection<'_> {
    Intersection { section_id, is_intersecting: true }
}

fn gone(section_id: &str) -> Intersection<'_> {
    Intersection { section_id, is_intersecting: false }
}

// =============================================================================
// observe
// =============================================================================

#[test]
fn nothing_active_before_first_report() {
    assert_eq!(spy().active(), None);
}

#[test]
fn intersecting_section_becomes_active() {
    let mut spy = spy();
    assert_eq!(spy.observe(&[seen("health")]), Some("health"));
}

#[test]
fn last_intersecting_entry_wins_within_a_batch() {
    let mut spy = spy();
    assert_eq!(spy.observe(&[seen("health"), seen("finance")]), Some("finance"));
}

#[test]
fn non_intersecting_report_keeps_previous_highlight() {
    let mut spy = spy();
    spy.observe(&[seen("health")]);
    assert_eq!(spy.observe(&[gone("health")]), Some("health"));
}

#[test]
fn later_batches_move_the_highlight() {
    let mut spy = spy();
    spy.observe(&[seen("health")]);
    spy.observe(&[gone("health"), seen("retail")]);
    assert_eq!(spy.active(), Some("retail"));
}

#[test]
fn unregistered_ids_are_ignored() {
    let mut spy = spy();
    spy.observe(&[seen("health")]);
    assert_eq!(spy.observe(&[seen("sidebar-ad")]), Some("health"));
}

#[test]
fn empty_batch_changes_nothing() {
    let mut spy = spy();
    spy.observe(&[seen("finance")]);
    assert_eq!(spy.observe(&[]), Some("finance"));
}

// =============================================================================
// scroll_target
// =============================================================================

#[test]
fn target_subtracts_body_offset_and_header_clearance() {
    // Section 940px below a body scrolled to -200px: land 100px above it.
    let target = ScrollSpy::scroll_target(740.0, -200.0);
    assert!((target - 840.0).abs() < f64::EPSILON);
}

#[test]
fn target_near_document_top_can_go_negative() {
    assert!(ScrollSpy::scroll_target(40.0, 0.0) < 0.0);
}
