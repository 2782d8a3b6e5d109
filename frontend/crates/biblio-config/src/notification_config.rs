use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DISMISS_LABEL, DEFAULT_NOTIFICATION_DURATION_MS,
    MAX_NOTIFICATION_DURATION_MS, MIN_NOTIFICATION_DURATION_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Transient notification settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
    pub dismiss_label: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            dismiss_label: String::from(DEFAULT_DISMISS_LABEL),
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.duration_ms < MIN_NOTIFICATION_DURATION_MS
            || self.duration_ms > MAX_NOTIFICATION_DURATION_MS
        {
            return Err(ConfigError::notification(format!(
                "notification.duration_ms must be {}-{}, got {}",
                MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS, self.duration_ms
            )));
        }

        if self.dismiss_label.trim().is_empty() {
            return Err(ConfigError::notification(
                "notification.dismiss_label cannot be empty",
            ));
        }

        Ok(())
    }
}
