//! Thin request builders for the REST resources. No caching, no retry.

mod books_client;
mod loans_client;
mod users_client;

pub use books_client::BooksClient;
pub use loans_client::LoansClient;
pub use users_client::UsersClient;
