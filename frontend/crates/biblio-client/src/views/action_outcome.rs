use serde::Serialize;

/// Result of a confirm-then-act operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    Completed,
    /// The user declined; nothing was sent
    Cancelled,
    /// The request failed; the user has been notified
    Failed,
}
