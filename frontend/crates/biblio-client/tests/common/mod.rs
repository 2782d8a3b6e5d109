pub mod fixtures;
pub mod test_app;

pub use fixtures::*;
pub use test_app::*;
