use crate::{AppContext, ClientError, ClientResult, Route};

use biblio_core::{BookForm, FieldError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFormMode {
    Create,
    Edit(String),
}

impl BookFormMode {
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::BookNew => Some(BookFormMode::Create),
            Route::BookEdit(id) => Some(BookFormMode::Edit(id.clone())),
            _ => None,
        }
    }
}

pub struct BookFormView {
    ctx: AppContext,
    mode: BookFormMode,
    form: BookForm,
}

impl BookFormView {
    pub fn new(ctx: AppContext, mode: BookFormMode) -> Self {
        Self {
            ctx,
            mode,
            form: BookForm::default(),
        }
    }

    pub fn mode(&self) -> &BookFormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, BookFormMode::Edit(_))
    }

    /// In edit mode, prefill from the backend. A missing book sends the
    /// user back to the catalog.
    pub async fn load(&mut self) -> ClientResult<()> {
        let BookFormMode::Edit(id) = &self.mode else {
            return Ok(());
        };

        match self.ctx.books().get(id).await {
            Ok(book) => {
                self.form = BookForm::from_book(&book);
                Ok(())
            }
            Err(e) => {
                self.ctx.notify_error("Failed to load book");
                self.ctx.navigator().navigate(Route::Books);
                Err(e)
            }
        }
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn set_form(&mut self, form: BookForm) {
        self.form = form;
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.form.errors()
    }

    pub async fn submit(&self) -> ClientResult<Route> {
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.ctx.notify_error(e.message());
                return Err(ClientError::from(e));
            }
        };

        let books = self.ctx.books();
        let (result, default_message) = match &self.mode {
            BookFormMode::Create => (books.create(&draft).await, "Book created"),
            BookFormMode::Edit(id) => (books.update(id, &draft).await, "Book updated"),
        };

        match result {
            Ok(response) => {
                self.ctx.notify_info(
                    response
                        .message
                        .unwrap_or_else(|| String::from(default_message)),
                );
                Ok(self.ctx.navigator().navigate(Route::Books))
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Failed to save book"));
                Err(e)
            }
        }
    }

    pub fn cancel(&self) -> Route {
        self.ctx.navigator().navigate(Route::Books)
    }
}
