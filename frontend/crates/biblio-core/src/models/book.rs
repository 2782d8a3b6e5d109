//! Book entity - a catalog entry with stock and availability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub category: String,
    pub stock: u32,
    /// Copies not currently on loan. Older backend revisions omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Copies that can be lent right now.
    ///
    /// An explicit `available` of zero wins over `stock`; only a missing
    /// count falls back to the stock figure.
    pub fn available_copies(&self) -> u32 {
        self.available.unwrap_or(self.stock)
    }

    pub fn is_available(&self) -> bool {
        self.available_copies() > 0
    }

    /// Option label used by the loan form's book selector
    pub fn option_label(&self) -> String {
        format!(
            "{} - {} (Available: {})",
            self.title,
            self.author,
            self.available_copies()
        )
    }
}
