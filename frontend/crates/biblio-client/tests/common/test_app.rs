#![allow(dead_code)]

use biblio_client::{
    ApiClient, AppContext, ConfirmationResponse, NotificationLog, Router, SessionStore,
    StaticConfirmer,
};
use biblio_config::NotificationConfig;

use std::sync::Arc;

use wiremock::MockServer;

/// A client context wired against a mock backend
pub struct TestApp {
    pub server: MockServer,
    pub ctx: AppContext,
    pub router: Arc<Router>,
    pub notifications: Arc<NotificationLog>,
    pub confirmer: Arc<StaticConfirmer>,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::with_options(ConfirmationResponse::Confirmed, true).await
    }

    pub async fn declining() -> Self {
        Self::with_options(ConfirmationResponse::Cancelled, true).await
    }

    pub async fn with_options(answer: ConfirmationResponse, refresh_profile: bool) -> Self {
        let server = MockServer::start().await;
        let api = ApiClient::new(&format!("{}/api", server.uri())).expect("valid mock URL");
        let session = SessionStore::new();
        let router = Arc::new(Router::new(session.clone()));
        let notifications = Arc::new(NotificationLog::new());
        let confirmer = Arc::new(StaticConfirmer::new(answer));

        let ctx = AppContext::new(
            api,
            session,
            router.clone(),
            notifications.clone(),
            confirmer.clone(),
            NotificationConfig::default(),
            refresh_profile,
        );

        Self {
            server,
            ctx,
            router,
            notifications,
            confirmer,
        }
    }

    pub fn last_message(&self) -> Option<String> {
        self.notifications.messages().pop()
    }
}
