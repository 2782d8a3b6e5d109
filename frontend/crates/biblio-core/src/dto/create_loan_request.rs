use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `POST /loans`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    /// Book id
    pub book: String,
    /// Borrowing user id
    pub user: String,
    pub due_date: DateTime<Utc>,
}
