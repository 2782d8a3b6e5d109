pub mod dto;
pub mod error;
pub mod forms;
pub mod models;

#[cfg(test)]
mod tests;

pub use dto::auth_response::{AuthResponse, AuthUser};
pub use dto::book_draft::BookDraft;
pub use dto::book_response::BookResponse;
pub use dto::create_loan_request::CreateLoanRequest;
pub use dto::envelope::Envelope;
pub use dto::loan_response::LoanResponse;
pub use dto::login_request::LoginRequest;
pub use dto::message_response::MessageResponse;
pub use dto::profile_response::ProfileResponse;
pub use dto::register_request::RegisterRequest;
pub use dto::user_list_response::UserListResponse;
pub use dto::user_response::UserResponse;
pub use error::{CoreError, CoreResult};
pub use forms::book_form::BookForm;
pub use forms::field_error::FieldError;
pub use forms::loan_form::LoanForm;
pub use forms::login_form::LoginForm;
pub use forms::register_form::RegisterForm;
pub use models::book::Book;
pub use models::entity_ref::EntityRef;
pub use models::identity::Identity;
pub use models::loan::Loan;
pub use models::loan_status::LoanStatus;
pub use models::role::Role;
pub use models::user::User;

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LENGTH: usize = 6;
