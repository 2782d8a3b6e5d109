//! Client-side form validation.
//!
//! Every form exposes `errors()` for inline display and `validate()`,
//! which blocks submission on the first invalid field and otherwise
//! produces the request body.

pub mod book_form;
pub mod field_error;
pub mod loan_form;
pub mod login_form;
pub mod register_form;

use crate::{CoreError, CoreResult, FieldError};

/// Loose email check in the spirit of HTML form validation: one `@`,
/// non-empty local part, dot-separated non-empty domain labels.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[track_caller]
pub(crate) fn first_error(errors: Vec<FieldError>) -> CoreResult<()> {
    match errors.into_iter().next() {
        Some(error) => Err(CoreError::validation(error.field, error.message)),
        None => Ok(()),
    }
}
