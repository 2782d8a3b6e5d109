use biblio_config::NotificationConfig;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient message with a dismiss action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub action: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            action: config.dismiss_label.clone(),
            duration_ms: config.duration_ms,
        }
    }
}
