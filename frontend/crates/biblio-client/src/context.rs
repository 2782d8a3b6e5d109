use crate::{
    ApiClient, AuthGateway, BooksClient, ClientResult, Confirmer, LoansClient, NavigationShell,
    Navigator, Notification, NotificationKind, Notifier, Router, SessionStore, UsersClient,
};

use biblio_config::{Config, NotificationConfig};

use std::sync::Arc;

/// Everything a view model needs, handed in rather than reached for.
#[derive(Clone)]
pub struct AppContext {
    api: ApiClient,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    notification: NotificationConfig,
    gateway: AuthGateway,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
        notification: NotificationConfig,
        refresh_profile_on_login: bool,
    ) -> Self {
        let gateway = AuthGateway::new(
            api.clone(),
            session.clone(),
            navigator.clone(),
            refresh_profile_on_login,
        );

        Self {
            api,
            session,
            navigator,
            notifier,
            confirmer,
            notification,
            gateway,
        }
    }

    /// Wire a context from loaded configuration. The router is returned
    /// as well so the caller can inspect history and resolve paths.
    pub fn from_config(
        config: &Config,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> ClientResult<(Self, Arc<Router>)> {
        let api = ApiClient::from_config(&config.api)?;
        let session = SessionStore::new();
        let router = Arc::new(Router::new(session.clone()));

        let context = Self::new(
            api,
            session,
            router.clone(),
            notifier,
            confirmer,
            config.notification.clone(),
            config.session.refresh_profile_on_login,
        );

        Ok((context, router))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn confirmer(&self) -> &Arc<dyn Confirmer> {
        &self.confirmer
    }

    pub fn gateway(&self) -> &AuthGateway {
        &self.gateway
    }

    pub fn books(&self) -> BooksClient {
        BooksClient::new(self.api.clone())
    }

    pub fn loans(&self) -> LoansClient {
        LoansClient::new(self.api.clone())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.api.clone())
    }

    pub fn navigation(&self) -> NavigationShell {
        NavigationShell::new(self.session.clone(), self.gateway.clone())
    }

    pub fn notify_info(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::new(
            NotificationKind::Info,
            message,
            &self.notification,
        ));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::new(
            NotificationKind::Error,
            message,
            &self.notification,
        ));
    }
}
