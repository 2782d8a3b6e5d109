use crate::forms::{first_error, is_blank};
use crate::{Book, BookDraft, CoreResult, FieldError};

/// Create/edit form for a catalog entry.
///
/// `stock` is signed so that a negative entry can be reported instead of
/// failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub stock: i64,
}

impl BookForm {
    /// Prefill from an existing book (edit mode)
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            stock: i64::from(book.stock),
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if is_blank(&self.title) {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if is_blank(&self.author) {
            errors.push(FieldError::new("author", "Author is required"));
        }
        if is_blank(&self.category) {
            errors.push(FieldError::new("category", "Category is required"));
        }

        if self.stock < 0 {
            errors.push(FieldError::new("stock", "Stock cannot be negative"));
        } else if u32::try_from(self.stock).is_err() {
            errors.push(FieldError::new("stock", "Stock is too large"));
        }

        errors
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<BookDraft> {
        first_error(self.errors())?;

        Ok(BookDraft {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            category: self.category.trim().to_string(),
            stock: u32::try_from(self.stock).unwrap_or_default(),
        })
    }
}
