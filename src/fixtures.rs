//! Canned demo-tenant data.
//!
//! DESIGN
//! ======
//! Payloads are pre-authored and returned verbatim except for timestamps,
//! which are computed relative to a supplied `now` so lists always look
//! recent. Builders are pure functions of `now`; callers decide the clock.

use time::macros::time;
use time::{Duration, OffsetDateTime};

use crate::models::calendar::{DateTimeTimeZone, Event, Location};
use crate::models::drive::{DriveItem, FileFacet, FolderFacet, IdentitySet};
use crate::models::mail::{Importance, Message};
use crate::models::user::UserProfile;
use crate::models::Recipient;

/// Fixed identifier of the demo user. Not a real object id; kept verbatim
/// from the demo tenant.
pub const DEMO_USER_ID: &str = "a1b2c3d4-e5f6-7890-g1h2-i3j4k5l6m7n8";

/// Opaque stand-in for an access token. Never parsed, never validated.
pub const MOCK_ACCESS_TOKEN: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiIsImtpZCI6IjF... (mock_token)";

const TENANT_USER: &str = "demo.user@m365x123456.onmicrosoft.com";
const DRIVE_WEB_URL: &str = "https://onedrive.live.com/...";

/// `@odata.context` value for a collection under the demo user.
#[must_use]
pub fn odata_context(resource: &str) -> String {
    format!("https://graph.microsoft.com/v1.0/$metadata#users('demo.user%40m365x123456.onmicrosoft.com')/{resource}")
}

/// The demo tenant's one and only user.
#[must_use]
pub fn demo_user() -> UserProfile {
    UserProfile {
        id: DEMO_USER_ID.to_owned(),
        display_name: "Demo User".to_owned(),
        given_name: "Demo".to_owned(),
        surname: "User".to_owned(),
        user_principal_name: TENANT_USER.to_owned(),
        mail: TENANT_USER.to_owned(),
        job_title: "Software Engineer".to_owned(),
        mobile_phone: "+1 555 010 9999".to_owned(),
        office_location: "123/456".to_owned(),
        preferred_language: "en-US".to_owned(),
    }
}

fn admin_team() -> Recipient {
    Recipient::new("Admin Team", "admin@m365x123456.onmicrosoft.com")
}

fn sarah_smith() -> Recipient {
    Recipient::new("Sarah Smith", "sarah.s@m365x123456.onmicrosoft.com")
}

fn mike_johnson() -> Recipient {
    Recipient::new("Mike Johnson", "mike.j@m365x123456.onmicrosoft.com")
}

fn demo_user_recipient() -> Recipient {
    Recipient::new("Demo User", TENANT_USER)
}

fn message(id: &str, stamped: OffsetDateTime, sender: Recipient) -> Message {
    Message {
        id: id.to_owned(),
        created_date_time: stamped,
        last_modified_date_time: stamped,
        received_date_time: stamped,
        has_attachments: false,
        subject: String::new(),
        body_preview: String::new(),
        importance: Importance::Normal,
        is_read: false,
        from: sender.clone(),
        sender,
    }
}

/// The inbox: exactly three messages, newest first.
#[must_use]
pub fn messages(now: OffsetDateTime) -> Vec<Message> {
    vec![
        Message {
            subject: "Welcome to Microsoft Graph Demo".to_owned(),
            body_preview: "Hi Demo User, Welcome to the Microsoft Graph API demonstration. This project showcases how to integrate various Graph services...".to_owned(),
            ..message("AAMkADh...", now, admin_team())
        },
        Message {
            has_attachments: true,
            subject: "Project Update: Q3 Goals".to_owned(),
            body_preview: "Please find attached the Q3 goals document. We need to review the timeline for the new feature rollout...".to_owned(),
            importance: Importance::High,
            is_read: true,
            ..message("BBMkADh...", now - Duration::days(1), sarah_smith())
        },
        Message {
            subject: "Coffee catch-up?".to_owned(),
            body_preview: "Hey, are you free for a quick coffee chat tomorrow morning? Wanted to discuss the new architecture...".to_owned(),
            importance: Importance::Low,
            is_read: true,
            ..message("CCMkADh...", now - Duration::days(2), mike_johnson())
        },
    ]
}

/// The calendar: one meeting today, two tomorrow.
#[must_use]
pub fn events(now: OffsetDateTime) -> Vec<Event> {
    let tomorrow = now + Duration::days(1);
    vec![
        Event {
            id: "AAMkADh...".to_owned(),
            subject: "Weekly Team Sync".to_owned(),
            body_preview: "Reviewing sprint progress and blockers.".to_owned(),
            start: DateTimeTimeZone::utc(now.replace_time(time!(10:00))),
            end: DateTimeTimeZone::utc(now.replace_time(time!(11:00))),
            location: Location { display_name: "Conference Room A".to_owned() },
            organizer: demo_user_recipient(),
            attendees: Vec::new(),
            is_online_meeting: true,
            online_meeting_provider: Some("teamsMeeting".to_owned()),
        },
        Event {
            id: "BBMkADh...".to_owned(),
            subject: "Client Demo - Graph API".to_owned(),
            body_preview: "Demonstrating the new integration capabilities.".to_owned(),
            start: DateTimeTimeZone::utc(tomorrow.replace_time(time!(14:00))),
            end: DateTimeTimeZone::utc(tomorrow.replace_time(time!(15:30))),
            location: Location { display_name: "Microsoft Teams".to_owned() },
            organizer: sarah_smith(),
            attendees: Vec::new(),
            is_online_meeting: true,
            online_meeting_provider: Some("teamsMeeting".to_owned()),
        },
        Event {
            id: "CCMkADh...".to_owned(),
            subject: "Code Review".to_owned(),
            body_preview: "Reviewing the PR for the authentication module.".to_owned(),
            start: DateTimeTimeZone::utc(tomorrow.replace_time(time!(16:00))),
            end: DateTimeTimeZone::utc(tomorrow.replace_time(time!(17:00))),
            location: Location { display_name: "Online".to_owned() },
            organizer: mike_johnson(),
            attendees: Vec::new(),
            is_online_meeting: false,
            online_meeting_provider: None,
        },
    ]
}

/// The drive root: one folder and three files.
#[must_use]
pub fn files(now: OffsetDateTime) -> Vec<DriveItem> {
    vec![
        DriveItem {
            id: "01ABCDEF...".to_owned(),
            name: "Documents".to_owned(),
            folder: Some(FolderFacet { child_count: 12 }),
            file: None,
            size: 1_024_000,
            last_modified_date_time: now - Duration::hours(1),
            web_url: DRIVE_WEB_URL.to_owned(),
            created_by: IdentitySet::user("Demo User"),
        },
        DriveItem {
            id: "02ABCDEF...".to_owned(),
            name: "Project_Proposal.docx".to_owned(),
            folder: None,
            file: Some(FileFacet {
                mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_owned(),
            }),
            size: 45_032,
            last_modified_date_time: now - Duration::hours(2),
            web_url: DRIVE_WEB_URL.to_owned(),
            created_by: IdentitySet::user("Demo User"),
        },
        DriveItem {
            id: "03ABCDEF...".to_owned(),
            name: "Budget_2024.xlsx".to_owned(),
            folder: None,
            file: Some(FileFacet {
                mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_owned(),
            }),
            size: 12_500,
            last_modified_date_time: now - Duration::days(1),
            web_url: DRIVE_WEB_URL.to_owned(),
            created_by: IdentitySet::user("Sarah Smith"),
        },
        DriveItem {
            id: "04ABCDEF...".to_owned(),
            name: "Architecture_Diagram.png".to_owned(),
            folder: None,
            file: Some(FileFacet { mime_type: "image/png".to_owned() }),
            size: 256_000,
            last_modified_date_time: now - Duration::days(2),
            web_url: DRIVE_WEB_URL.to_owned(),
            created_by: IdentitySet::user("Mike Johnson"),
        },
    ]
}

/// Synthetic download body for a fixture file.
#[must_use]
pub fn file_bytes(item: &DriveItem) -> Vec<u8> {
    format!("mock content of {} ({} bytes on the demo drive)", item.name, item.size).into_bytes()
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;
