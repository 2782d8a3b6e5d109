//! Authenticated identity held by the session.

use crate::{CoreError, Role, models::record_id::resolve_id};

use serde::{Deserialize, Serialize};

/// Who is logged in and what they may do.
///
/// The backend sends Mongo-style `_id`, the `id` virtual, or both;
/// they collapse into `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityWire")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// "First Last", or the email when the backend sent no names
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityWire {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    email: String,
    role: Role,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

impl TryFrom<IdentityWire> for Identity {
    type Error = CoreError;

    fn try_from(wire: IdentityWire) -> Result<Self, Self::Error> {
        Ok(Identity {
            id: resolve_id("identity", wire.underscore_id, wire.id)?,
            email: wire.email,
            role: wire.role,
            first_name: wire.first_name,
            last_name: wire.last_name,
        })
    }
}
