use crate::{Book, impl_envelope};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub book: Option<Book>,
    #[serde(default)]
    pub books: Option<Vec<Book>>,
}

impl_envelope!(BookResponse);
