use super::*;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-08-06 09:30 UTC);

// =============================================================================
// demo_user
// =============================================================================

#[test]
fn demo_user_has_fixed_identity() {
    let user = demo_user();
    assert_eq!(user.id, DEMO_USER_ID);
    assert_eq!(user.display_name, "Demo User");
    assert_eq!(user.user_principal_name, "demo.user@m365x123456.onmicrosoft.com");
    assert_eq!(user.mail, user.user_principal_name);
}

// =============================================================================
// messages
// =============================================================================

#[test]
fn inbox_has_exactly_three_messages() {
    assert_eq!(messages(NOW).len(), 3);
}

#[test]
fn messages_are_stamped_relative_to_now() {
    let inbox = messages(NOW);
    assert_eq!(inbox[0].received_date_time, NOW);
    assert_eq!(inbox[1].received_date_time, NOW - Duration::days(1));
    assert_eq!(inbox[2].received_date_time, NOW - Duration::days(2));
}

#[test]
fn message_importance_spans_all_levels() {
    let inbox = messages(NOW);
    assert_eq!(inbox[0].importance, Importance::Normal);
    assert_eq!(inbox[1].importance, Importance::High);
    assert_eq!(inbox[2].importance, Importance::Low);
}

#[test]
fn sender_and_from_stay_equal() {
    for msg in messages(NOW) {
        assert_eq!(msg.sender, msg.from);
    }
}

#[test]
fn message_serializes_graph_field_names() {
    let json = serde_json::to_value(&messages(NOW)[0]).unwrap();
    assert!(json["bodyPreview"].as_str().unwrap().starts_with("Hi Demo User"));
    assert_eq!(json["hasAttachments"], false);
    assert_eq!(json["isRead"], false);
    assert_eq!(json["sender"]["emailAddress"]["name"], "Admin Team");
    assert_eq!(json["receivedDateTime"], "2026-08-06T09:30:00Z");
}

// =============================================================================
// events
// =============================================================================

#[test]
fn calendar_has_three_events() {
    assert_eq!(events(NOW).len(), 3);
}

#[test]
fn first_event_runs_ten_to_eleven_today() {
    let first = &events(NOW)[0];
    assert_eq!(first.start.date_time, datetime!(2026-08-06 10:00 UTC));
    assert_eq!(first.end.date_time, datetime!(2026-08-06 11:00 UTC));
    assert_eq!(first.start.time_zone, "UTC");
}

#[test]
fn remaining_events_fall_tomorrow() {
    let all = events(NOW);
    assert_eq!(all[1].start.date_time, datetime!(2026-08-07 14:00 UTC));
    assert_eq!(all[1].end.date_time, datetime!(2026-08-07 15:30 UTC));
    assert_eq!(all[2].start.date_time, datetime!(2026-08-07 16:00 UTC));
    assert_eq!(all[2].end.date_time, datetime!(2026-08-07 17:00 UTC));
}

#[test]
fn every_event_ends_after_it_starts() {
    for event in events(NOW) {
        assert!(event.end.date_time > event.start.date_time, "{}", event.subject);
    }
}

#[test]
fn online_meeting_provider_only_on_teams_meetings() {
    let all = events(NOW);
    assert_eq!(all[0].online_meeting_provider.as_deref(), Some("teamsMeeting"));
    assert_eq!(all[1].online_meeting_provider.as_deref(), Some("teamsMeeting"));
    assert!(all[2].online_meeting_provider.is_none());
    assert!(!all[2].is_online_meeting);
}

// =============================================================================
// files
// =============================================================================

#[test]
fn drive_root_lists_one_folder_and_three_files() {
    let items = files(NOW);
    assert_eq!(items.len(), 4);
    assert_eq!(items.iter().filter(|i| i.is_folder()).count(), 1);
    assert_eq!(items.iter().filter(|i| i.is_file()).count(), 3);
}

#[test]
fn folder_carries_child_count_not_mime() {
    let items = files(NOW);
    let folder = &items[0];
    assert_eq!(folder.name, "Documents");
    assert_eq!(folder.folder.unwrap().child_count, 12);
    assert!(folder.file.is_none());
}

#[test]
fn file_timestamps_relativize_against_now() {
    let items = files(NOW);
    assert_eq!(items[0].last_modified_date_time, NOW - Duration::hours(1));
    assert_eq!(items[3].last_modified_date_time, NOW - Duration::days(2));
}

#[test]
fn file_bytes_are_nonempty_and_name_them() {
    let items = files(NOW);
    let bytes = file_bytes(&items[1]);
    assert!(!bytes.is_empty());
    assert!(String::from_utf8(bytes).unwrap().contains("Project_Proposal.docx"));
}

// =============================================================================
// odata_context
// =============================================================================

#[test]
fn odata_context_embeds_encoded_principal() {
    let ctx = odata_context("messages");
    assert!(ctx.starts_with("https://graph.microsoft.com/v1.0/$metadata#users("));
    assert!(ctx.contains("demo.user%40m365x123456.onmicrosoft.com"));
    assert!(ctx.ends_with("/messages"));
}
