use crate::{ApiClient, ClientError, ClientResult, Navigator, Route, SessionStore};

use biblio_core::{
    AuthResponse, Identity, LoginRequest, MessageResponse, ProfileResponse, RegisterRequest,
};

use std::sync::Arc;

use log::{info, warn};
use reqwest::Method;
use serde::Serialize;

/// A successful login or registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub identity: Identity,
    /// Backend message, e.g. "Login successful"
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutOutcome {
    /// Backend acknowledged the logout
    Confirmed,
    /// Backend call failed; only the local session was cleared
    LocalOnly,
}

/// Talks to `/auth/*` and is the only writer of the session.
#[derive(Clone)]
pub struct AuthGateway {
    api: ApiClient,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    refresh_profile_on_login: bool,
}

impl AuthGateway {
    pub fn new(
        api: ApiClient,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        refresh_profile_on_login: bool,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            refresh_profile_on_login,
        }
    }

    /// The session is set before this resolves, and only on success.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<Authenticated> {
        let req = self.api.request(Method::POST, "/auth/login").json(request);
        let response: AuthResponse = self.api.execute(req).await?;
        self.adopt(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Authenticated> {
        let req = self.api.request(Method::POST, "/auth/register").json(request);
        let response: AuthResponse = self.api.execute(req).await?;
        self.adopt(response).await
    }

    async fn adopt(&self, response: AuthResponse) -> ClientResult<Authenticated> {
        let identity = match response.user {
            Some(user) if !self.refresh_profile_on_login => {
                let identity = Identity::from(user);
                self.session.set(identity.clone());
                identity
            }
            _ => self.fetch_profile().await?,
        };

        Ok(Authenticated {
            identity,
            message: response.message,
        })
    }

    /// Ends the session locally no matter what the backend says.
    pub async fn logout(&self) -> LogoutOutcome {
        let req = self.api.request(Method::POST, "/auth/logout");
        let outcome = match self.api.execute::<MessageResponse>(req).await {
            Ok(_) => LogoutOutcome::Confirmed,
            Err(e) => {
                warn!("Logout request failed, clearing local session anyway: {}", e);
                LogoutOutcome::LocalOnly
            }
        };

        self.session.clear();
        self.navigator.navigate(Route::Login);
        info!("Logged out");

        outcome
    }

    /// Reload the identity behind the session cookie. Any failure ends
    /// the session.
    pub async fn fetch_profile(&self) -> ClientResult<Identity> {
        let req = self.api.request(Method::GET, "/auth/me");

        let result = self
            .api
            .execute::<ProfileResponse>(req)
            .await
            .and_then(|response| response.user.ok_or_else(|| ClientError::missing("user")));

        match result {
            Ok(identity) => {
                self.session.set(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                self.session.clear();
                Err(e)
            }
        }
    }
}
