use serde::{Deserialize, Serialize};

/// Body of `POST /books` and `PUT /books/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub stock: u32,
}
