use crate::SessionSubscription;

use biblio_core::Identity;

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Who is logged in, shared by everything that reads or changes it.
///
/// Cloning yields another handle to the same session. Writes go through
/// the auth gateway; guards, the navigation shell and view models read.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sender: Arc<watch::Sender<Option<Identity>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.sender
            .borrow()
            .as_ref()
            .is_some_and(Identity::is_admin)
    }

    /// Replace the identity. Observers are notified only when it changes.
    pub fn set(&self, identity: Identity) {
        let changed = self.sender.send_if_modified(|current| {
            if current.as_ref() == Some(&identity) {
                return false;
            }
            *current = Some(identity.clone());
            true
        });

        if changed {
            info!(
                "Session started for {} ({})",
                identity.email,
                identity.role.as_str()
            );
        }
    }

    pub fn clear(&self) {
        let changed = self.sender.send_if_modified(|current| current.take().is_some());

        if changed {
            info!("Session cleared");
        }
    }

    /// Subscribe: yields the current value first, then every change.
    pub fn observe(&self) -> SessionSubscription {
        SessionSubscription::new(self.sender.subscribe())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
