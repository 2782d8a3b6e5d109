//! Route table, guards, and the router that applies them.

mod guard;
mod route;
mod router;

pub use guard::{AdminGuard, AuthGuard, Guard, GuardKind, GuardOutcome};
pub use route::Route;
pub use router::{HISTORY_LIMIT, MAX_REDIRECTS, Navigator, Router};
