use crate::{AppContext, ClientError, ClientResult, Route};

use biblio_core::{Book, FieldError, LoanForm, User};

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Selector contents. `books` holds only books that can be lent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanFormState {
    pub books: Vec<Book>,
    pub users: Vec<User>,
}

pub struct LoanFormView {
    ctx: AppContext,
    state: LoanFormState,
}

impl LoanFormView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: LoanFormState::default(),
        }
    }

    /// Fetch books and users concurrently. Each failure is notified on
    /// its own and leaves the other list intact.
    pub async fn load(&mut self) {
        let books_client = self.ctx.books();
        let users_client = self.ctx.users();
        let (books, users) = futures::join!(books_client.list(None), users_client.list());

        match books {
            Ok(books) => self.state.books = LoanForm::selectable_books(&books),
            Err(_) => self.ctx.notify_error("Failed to load books"),
        }
        match users {
            Ok(users) => self.state.users = users,
            Err(_) => self.ctx.notify_error("Failed to load users"),
        }
    }

    pub fn state(&self) -> &LoanFormState {
        &self.state
    }

    pub fn book_options(&self) -> Vec<SelectOption> {
        self.state
            .books
            .iter()
            .filter_map(|book| {
                book.id.as_ref().map(|id| SelectOption {
                    value: id.clone(),
                    label: book.option_label(),
                })
            })
            .collect()
    }

    pub fn user_options(&self) -> Vec<SelectOption> {
        self.state
            .users
            .iter()
            .map(|user| SelectOption {
                value: user.id.clone(),
                label: user.option_label(),
            })
            .collect()
    }

    pub fn errors(&self, form: &LoanForm, today: NaiveDate) -> Vec<FieldError> {
        form.errors(today, &self.state.books)
    }

    pub async fn submit(&self, form: &LoanForm, today: NaiveDate) -> ClientResult<Route> {
        let request = match form.validate(today, &self.state.books) {
            Ok(request) => request,
            Err(e) => {
                self.ctx.notify_error(e.message());
                return Err(ClientError::from(e));
            }
        };

        match self.ctx.loans().create(&request).await {
            Ok(response) => {
                self.ctx
                    .notify_info(response.message.unwrap_or_else(|| String::from("Loan created")));
                Ok(self.ctx.navigator().navigate(Route::Loans))
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Failed to create loan"));
                Err(e)
            }
        }
    }

    pub fn cancel(&self) -> Route {
        self.ctx.navigator().navigate(Route::Loans)
    }
}
