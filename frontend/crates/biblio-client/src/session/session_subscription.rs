use biblio_core::Identity;

use futures::Stream;
use tokio::sync::watch;

/// A live view of the session.
///
/// The first `next()` resolves immediately with the value held at
/// subscription time; later calls wait for a change.
#[derive(Debug)]
pub struct SessionSubscription {
    receiver: watch::Receiver<Option<Identity>>,
    delivered_initial: bool,
}

impl SessionSubscription {
    pub(crate) fn new(receiver: watch::Receiver<Option<Identity>>) -> Self {
        Self {
            receiver,
            delivered_initial: false,
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.receiver.borrow().clone()
    }

    /// Next session value, or `None` once the store is gone.
    pub async fn next(&mut self) -> Option<Option<Identity>> {
        if !self.delivered_initial {
            self.delivered_initial = true;
            return Some(self.receiver.borrow_and_update().clone());
        }

        match self.receiver.changed().await {
            Ok(()) => Some(self.receiver.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Option<Identity>> + Send {
        futures::stream::unfold(self, |mut subscription| async move {
            subscription
                .next()
                .await
                .map(|value| (value, subscription))
        })
    }
}
