//! Request and response bodies exchanged with the library backend.

pub mod auth_response;
pub mod book_draft;
pub mod book_response;
pub mod create_loan_request;
pub mod envelope;
pub mod loan_response;
pub mod login_request;
pub mod message_response;
pub mod profile_response;
pub mod register_request;
pub mod user_list_response;
pub mod user_response;
