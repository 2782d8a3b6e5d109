use crate::{
    ActionOutcome, AppContext, ConfirmationRequest, ConfirmationResponse, Route, SearchSequencer,
};

use biblio_core::Book;

use std::sync::{Mutex, PoisonError};

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BooksListState {
    pub query: String,
    pub books: Vec<Book>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results written to the view
    Applied,
    /// A newer search was started meanwhile; results dropped
    Stale,
}

/// Catalog screen. Shared by reference so searches may overlap.
pub struct BooksListView {
    ctx: AppContext,
    sequencer: SearchSequencer,
    state: Mutex<BooksListState>,
}

impl BooksListView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            sequencer: SearchSequencer::new(),
            state: Mutex::new(BooksListState::default()),
        }
    }

    pub fn state(&self) -> BooksListState {
        self.lock().clone()
    }

    /// Create, edit and delete are offered to administrators only
    pub fn can_manage(&self) -> bool {
        self.ctx.session().is_admin()
    }

    /// Reload with the current query
    pub async fn load(&self) -> SearchOutcome {
        let query = self.lock().query.clone();
        self.search(&query).await
    }

    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.sequencer.issue();
        {
            let mut state = self.lock();
            state.query = query.to_string();
            state.loading = true;
        }

        let result = self.ctx.books().list(Some(query)).await;

        if !self.sequencer.is_current(ticket) {
            debug!(
                "Discarding stale book search #{} for '{}'",
                ticket.generation(),
                query
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(books) => {
                let mut state = self.lock();
                state.books = books;
                state.loading = false;
            }
            Err(e) => {
                self.lock().loading = false;
                debug!("Book search failed: {}", e);
                self.ctx.notify_error("Failed to load books");
            }
        }

        SearchOutcome::Applied
    }

    pub fn create(&self) -> Route {
        self.ctx.navigator().navigate(Route::BookNew)
    }

    pub fn edit(&self, book: &Book) -> Route {
        match &book.id {
            Some(id) => self.ctx.navigator().navigate(Route::BookEdit(id.clone())),
            None => self.ctx.navigator().current(),
        }
    }

    /// Ask, delete, notify, reload
    pub async fn delete(&self, book: &Book) -> ActionOutcome {
        let Some(id) = book.id.as_deref() else {
            self.ctx.notify_error("Failed to delete book");
            return ActionOutcome::Failed;
        };

        let request = ConfirmationRequest::new(
            format!("Are you sure you want to delete the book \"{}\"?", book.title),
            "Delete",
        );
        if self.ctx.confirmer().confirm(request).await == ConfirmationResponse::Cancelled {
            return ActionOutcome::Cancelled;
        }

        match self.ctx.books().delete(id).await {
            Ok(response) => {
                self.ctx
                    .notify_info(response.message.unwrap_or_else(|| String::from("Book deleted")));
                self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.notify_error(e.user_message("Failed to delete book"));
                ActionOutcome::Failed
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BooksListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
