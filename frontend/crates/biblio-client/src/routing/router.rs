use crate::{AdminGuard, AuthGuard, Guard, GuardKind, GuardOutcome, Route, SessionStore};

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

/// Upper bound on chained redirects while resolving one navigation
pub const MAX_REDIRECTS: usize = 8;

/// Entries kept in the navigation history; the oldest are dropped first
pub const HISTORY_LIMIT: usize = 64;

/// Something that can move the application to another screen.
pub trait Navigator: Send + Sync {
    /// Enter `route` (after guards) and return where we actually landed.
    fn navigate(&self, route: Route) -> Route;

    fn current(&self) -> Route;
}

#[derive(Debug)]
struct RouterState {
    current: Route,
    history: VecDeque<Route>,
}

/// Applies each route's guard chain and tracks where the user is.
#[derive(Debug)]
pub struct Router {
    auth_guard: AuthGuard,
    admin_guard: AdminGuard,
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new(session: SessionStore) -> Self {
        Self {
            auth_guard: AuthGuard::new(session.clone()),
            admin_guard: AdminGuard::new(session),
            state: Mutex::new(RouterState {
                current: Route::Login,
                history: VecDeque::with_capacity(HISTORY_LIMIT),
            }),
        }
    }

    fn guard(&self, kind: GuardKind) -> &dyn Guard {
        match kind {
            GuardKind::Authenticated => &self.auth_guard,
            GuardKind::Admin => &self.admin_guard,
        }
    }

    /// Where a navigation to `route` ends up, without entering it.
    ///
    /// The first failing guard's redirect wins and is resolved the same
    /// way. Gives up on the login screen if redirects keep chaining.
    pub fn resolve(&self, route: Route) -> Route {
        let mut target = route;

        for _ in 0..=MAX_REDIRECTS {
            let redirect = target
                .guards()
                .iter()
                .map(|kind| self.guard(*kind).can_activate())
                .find_map(|outcome| match outcome {
                    GuardOutcome::Pass => None,
                    GuardOutcome::Redirect(to) => Some(to),
                });

            match redirect {
                None => return target,
                Some(to) => {
                    debug!("Guard redirected {} -> {}", target, to);
                    target = to;
                }
            }
        }

        warn!("Redirect limit reached, falling back to {}", Route::Login);
        Route::Login
    }

    pub fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::parse(path))
    }

    /// The last [`HISTORY_LIMIT`] routes entered, oldest first
    pub fn history(&self) -> Vec<Route> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .iter()
            .cloned()
            .collect()
    }
}

impl Navigator for Router {
    fn navigate(&self, route: Route) -> Route {
        let landed = self.resolve(route);

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.current = landed.clone();
        if state.history.len() == HISTORY_LIMIT {
            state.history.pop_front();
        }
        state.history.push_back(landed.clone());
        debug!("Navigated to {}", landed);

        landed
    }

    fn current(&self) -> Route {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }
}
