use crate::{AuthGateway, LogoutOutcome, NavState, SessionStore};

use futures::{Stream, StreamExt};

/// Top bar: links and user badge derived from the session, plus logout.
#[derive(Clone)]
pub struct NavigationShell {
    session: SessionStore,
    gateway: AuthGateway,
}

impl NavigationShell {
    pub fn new(session: SessionStore, gateway: AuthGateway) -> Self {
        Self { session, gateway }
    }

    pub fn state(&self) -> NavState {
        NavState::for_identity(self.session.current().as_ref())
    }

    /// Current state first, then a new state on every session change
    pub fn watch(&self) -> impl Stream<Item = NavState> + Send + use<> {
        self.session
            .observe()
            .into_stream()
            .map(|identity| NavState::for_identity(identity.as_ref()))
    }

    pub async fn logout(&self) -> LogoutOutcome {
        self.gateway.logout().await
    }
}
