pub(crate) mod api_client;
pub(crate) mod error;

pub use api_client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
