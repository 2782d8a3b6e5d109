//! Seams to the presentation layer: transient notifications and
//! yes/no confirmations.

mod confirmer;
mod notification;
mod notifier;

pub use confirmer::{ConfirmationRequest, ConfirmationResponse, Confirmer, StaticConfirmer};
pub use notification::{Notification, NotificationKind};
pub use notifier::{NotificationLog, Notifier};
