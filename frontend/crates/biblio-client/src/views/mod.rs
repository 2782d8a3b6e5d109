//! UI-agnostic controllers, one per screen.
//!
//! Each view model validates its form, calls the backend, turns the
//! result into a notification, and navigates on success. Errors are
//! notified and also returned so a front end can react.

mod action_outcome;
mod book_form_view;
mod books_list_view;
mod loan_form_view;
mod loans_list_view;
mod login_view;
mod register_view;
mod search_sequencer;
mod users_list_view;

pub use action_outcome::ActionOutcome;
pub use book_form_view::{BookFormMode, BookFormView};
pub use books_list_view::{BooksListState, BooksListView, SearchOutcome};
pub use loan_form_view::{LoanFormState, LoanFormView, SelectOption};
pub use loans_list_view::{LoanRow, LoansListView};
pub use login_view::LoginView;
pub use register_view::RegisterView;
pub use search_sequencer::{SearchSequencer, SearchTicket};
pub use users_list_view::UsersListView;
