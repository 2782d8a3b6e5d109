use crate::{User, impl_envelope};

use serde::{Deserialize, Serialize};

/// Response of `GET /users/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl_envelope!(UserResponse);
