//! biblio-client
//!
//! Session state, route guarding, and REST access for the library
//! backend, plus UI-agnostic view models that a front end drives.

pub mod api;
pub mod auth;
pub mod context;
pub mod navigation;
pub mod resources;
pub mod routing;
pub mod session;
pub mod ui;
pub mod views;

#[cfg(test)]
mod tests;

pub use api::{ApiClient, ClientError, ClientResult};
pub use auth::{AuthGateway, Authenticated, LogoutOutcome};
pub use context::AppContext;
pub use navigation::{NavLink, NavState, NavigationShell, UserBadge};
pub use resources::{BooksClient, LoansClient, UsersClient};
pub use routing::{
    AdminGuard, AuthGuard, Guard, GuardKind, GuardOutcome, HISTORY_LIMIT, MAX_REDIRECTS, Navigator,
    Route, Router,
};
pub use session::{SessionStore, SessionSubscription};
pub use ui::{
    ConfirmationRequest, ConfirmationResponse, Confirmer, Notification, NotificationKind,
    NotificationLog, Notifier, StaticConfirmer,
};
pub use views::{
    ActionOutcome, BookFormMode, BookFormView, BooksListState, BooksListView, LoanFormState,
    LoanFormView, LoanRow, LoansListView, LoginView, RegisterView, SearchOutcome,
    SearchSequencer, SearchTicket, SelectOption, UsersListView,
};
