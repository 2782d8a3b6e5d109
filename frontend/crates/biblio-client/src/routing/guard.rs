use crate::{Route, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Pass,
    Redirect(Route),
}

impl GuardOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, GuardOutcome::Pass)
    }
}

/// Synchronous check consulted before a route is entered.
pub trait Guard: Send + Sync {
    fn can_activate(&self) -> GuardOutcome;
}

/// Passes when someone is logged in; otherwise sends them to login.
#[derive(Clone, Debug)]
pub struct AuthGuard {
    session: SessionStore,
}

impl AuthGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl Guard for AuthGuard {
    fn can_activate(&self) -> GuardOutcome {
        if self.session.is_authenticated() {
            GuardOutcome::Pass
        } else {
            GuardOutcome::Redirect(Route::Login)
        }
    }
}

/// Passes for administrators; everyone else goes back to the catalog.
#[derive(Clone, Debug)]
pub struct AdminGuard {
    session: SessionStore,
}

impl AdminGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl Guard for AdminGuard {
    fn can_activate(&self) -> GuardOutcome {
        if self.session.is_admin() {
            GuardOutcome::Pass
        } else {
            GuardOutcome::Redirect(Route::Books)
        }
    }
}
