mod nav_state;
mod navigation_shell;

pub use nav_state::{NavLink, NavState, UserBadge};
pub use navigation_shell::NavigationShell;
