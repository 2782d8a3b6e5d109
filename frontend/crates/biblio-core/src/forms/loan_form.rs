use crate::forms::{first_error, is_blank};
use crate::{Book, CoreResult, CreateLoanRequest, FieldError};

use chrono::{NaiveDate, NaiveTime};

/// New-loan form: a book from the selector, a user, and a due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub book: String,
    pub user: String,
    pub due_date: Option<NaiveDate>,
}

impl LoanForm {
    /// Books the selector offers: identified and with a copy on the shelf.
    pub fn selectable_books(books: &[Book]) -> Vec<Book> {
        books
            .iter()
            .filter(|book| book.id.is_some() && book.is_available())
            .cloned()
            .collect()
    }

    /// `offered` is the selector's option list; a book id outside it is
    /// rejected even if the backend knows it.
    pub fn errors(&self, today: NaiveDate, offered: &[Book]) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.book) {
            errors.push(FieldError::new("book", "Select a book"));
        } else if !offered
            .iter()
            .any(|book| book.id.as_deref() == Some(self.book.trim()) && book.is_available())
        {
            errors.push(FieldError::new("book", "Book is not available for loan"));
        }

        if is_blank(&self.user) {
            errors.push(FieldError::new("user", "Select a user"));
        }

        match self.due_date {
            None => errors.push(FieldError::new("dueDate", "Due date is required")),
            Some(due) if due < today => {
                errors.push(FieldError::new("dueDate", "Due date cannot be in the past"))
            }
            Some(_) => {}
        }

        errors
    }

    #[track_caller]
    pub fn validate(&self, today: NaiveDate, offered: &[Book]) -> CoreResult<CreateLoanRequest> {
        first_error(self.errors(today, offered))?;

        let due_date = self
            .due_date
            .unwrap_or(today)
            .and_time(NaiveTime::MIN)
            .and_utc();

        Ok(CreateLoanRequest {
            book: self.book.trim().to_string(),
            user: self.user.trim().to_string(),
            due_date,
        })
    }
}
