mod book;
mod identity;
mod loan;
mod role;
mod user;
