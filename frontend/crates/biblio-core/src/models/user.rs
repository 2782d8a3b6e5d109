use crate::{CoreError, Identity, Role, models::record_id::resolve_id};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A library user as listed by the administration endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserWire")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Option label used by the loan form's user selector
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.full_name(), self.email)
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Identity {
            id: user.id,
            email: user.email,
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWire {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    role: Role,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserWire> for User {
    type Error = CoreError;

    fn try_from(wire: UserWire) -> Result<Self, Self::Error> {
        Ok(User {
            id: resolve_id("user", wire.underscore_id, wire.id)?,
            first_name: wire.first_name,
            last_name: wire.last_name,
            email: wire.email,
            role: wire.role,
            created_at: wire.created_at,
        })
    }
}
