//! The `/me` user resource projection.

use serde::{Deserialize, Serialize};

/// Profile fields the demo tenant exposes for the signed-in user.
///
/// Every field is populated by the fixture, so none are optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub given_name: String,
    pub surname: String,
    pub user_principal_name: String,
    pub mail: String,
    pub job_title: String,
    pub mobile_phone: String,
    pub office_location: String,
    pub preferred_language: String,
}
