pub mod book;
pub mod entity_ref;
pub mod identity;
pub mod loan;
pub mod loan_status;
pub(crate) mod record_id;
pub mod role;
pub mod user;
