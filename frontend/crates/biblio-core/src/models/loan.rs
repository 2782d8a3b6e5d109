//! Loan entity - one book lent to one user until a due date.

use crate::{Book, EntityRef, LoanStatus, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub book: EntityRef<Book>,
    pub user: EntityRef<User>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub returned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Title of the populated book, or its id
    pub fn book_title(&self) -> &str {
        match &self.book {
            EntityRef::Id(id) => id,
            EntityRef::Expanded(book) => &book.title,
        }
    }

    /// Full name of the populated user, or its id
    pub fn user_name(&self) -> String {
        match &self.user {
            EntityRef::Id(id) => id.clone(),
            EntityRef::Expanded(user) => user.full_name(),
        }
    }

    /// A returned loan is never overdue
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.returned && self.due_date < now
    }

    pub fn status(&self, now: DateTime<Utc>) -> LoanStatus {
        if self.returned {
            LoanStatus::Returned
        } else if self.is_overdue(now) {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }
}
