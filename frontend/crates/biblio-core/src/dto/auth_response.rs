use crate::{CoreError, Identity, Role, impl_envelope, models::record_id::resolve_id};

use serde::{Deserialize, Serialize};

/// Response of `POST /auth/login` and `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl_envelope!(AuthResponse);

/// The reduced user the auth endpoints return: no names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthUserWire")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl From<AuthUser> for Identity {
    fn from(user: AuthUser) -> Self {
        Identity {
            id: user.id,
            email: user.email,
            role: user.role,
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

#[derive(Deserialize)]
struct AuthUserWire {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    email: String,
    role: Role,
}

impl TryFrom<AuthUserWire> for AuthUser {
    type Error = CoreError;

    fn try_from(wire: AuthUserWire) -> Result<Self, Self::Error> {
        Ok(AuthUser {
            id: resolve_id("auth user", wire.underscore_id, wire.id)?,
            email: wire.email,
            role: wire.role,
        })
    }
}
