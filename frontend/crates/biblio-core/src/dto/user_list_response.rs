use crate::{User, impl_envelope};

use serde::{Deserialize, Serialize};

/// Response of `GET /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl_envelope!(UserListResponse);
