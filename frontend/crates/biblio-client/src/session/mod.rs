mod session_store;
mod session_subscription;

pub use session_store::SessionStore;
pub use session_subscription::SessionSubscription;
