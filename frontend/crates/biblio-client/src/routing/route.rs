use crate::GuardKind;

use std::fmt;

use serde::{Serialize, Serializer};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const BOOKS_PATH: &str = "/books";
const BOOK_NEW_PATH: &str = "/books/new";
const BOOK_EDIT_PREFIX: &str = "/books/edit/";
const LOANS_PATH: &str = "/loans";
const LOAN_NEW_PATH: &str = "/loans/new";
const USERS_PATH: &str = "/users";

const PUBLIC: &[GuardKind] = &[];
const AUTHENTICATED: &[GuardKind] = &[GuardKind::Authenticated];
const ADMIN_ONLY: &[GuardKind] = &[GuardKind::Authenticated, GuardKind::Admin];

/// Every screen of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Books,
    BookNew,
    BookEdit(String),
    Loans,
    LoanNew,
    Users,
}

impl Route {
    /// Map a path onto a route. Empty and unknown paths land on the catalog.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            LOGIN_PATH => Route::Login,
            REGISTER_PATH => Route::Register,
            BOOKS_PATH => Route::Books,
            BOOK_NEW_PATH => Route::BookNew,
            LOANS_PATH => Route::Loans,
            LOAN_NEW_PATH => Route::LoanNew,
            USERS_PATH => Route::Users,
            _ => match path.strip_prefix(BOOK_EDIT_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::BookEdit(id.to_string()),
                _ => Route::Books,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Register => REGISTER_PATH.to_string(),
            Route::Books => BOOKS_PATH.to_string(),
            Route::BookNew => BOOK_NEW_PATH.to_string(),
            Route::BookEdit(id) => format!("{BOOK_EDIT_PREFIX}{id}"),
            Route::Loans => LOANS_PATH.to_string(),
            Route::LoanNew => LOAN_NEW_PATH.to_string(),
            Route::Users => USERS_PATH.to_string(),
        }
    }

    /// Guards evaluated in order before the route is entered
    pub fn guards(&self) -> &'static [GuardKind] {
        match self {
            Route::Login | Route::Register => PUBLIC,
            Route::Books | Route::Loans => AUTHENTICATED,
            Route::BookNew | Route::BookEdit(_) | Route::LoanNew | Route::Users => ADMIN_ONLY,
        }
    }

    pub fn is_public(&self) -> bool {
        self.guards().is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
