use crate::impl_envelope;

use serde::{Deserialize, Serialize};

/// Bare `{ success, message }` response, e.g. of `POST /auth/logout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl_envelope!(MessageResponse);
