//! User rows as the user-management list endpoint returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role;
use crate::models::role::Role;

/// One row of the Users list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "role::lenient")]
    pub role: Option<Role>,
    pub verified: bool,
    /// Meaningful only for cashiers; the backend omits it for other roles.
    #[serde(default)]
    pub suspicious: Option<bool>,
    pub points: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}
