use crate::{Identity, impl_envelope};

use serde::{Deserialize, Serialize};

/// Response of `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
}

impl_envelope!(ProfileResponse);
