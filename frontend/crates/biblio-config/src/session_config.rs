use crate::DEFAULT_REFRESH_PROFILE_ON_LOGIN;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// After a successful login or registration, fetch `/auth/me` and
    /// store that identity instead of the reduced one the auth endpoint
    /// returns.
    pub refresh_profile_on_login: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_profile_on_login: DEFAULT_REFRESH_PROFILE_ON_LOGIN,
        }
    }
}
