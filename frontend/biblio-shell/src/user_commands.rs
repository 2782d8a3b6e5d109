use biblio_client::Route;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum UserCommands {
    /// List all users
    List,
    /// Get a user by ID
    Get { id: String },
}

impl UserCommands {
    pub(crate) fn route(&self) -> Route {
        Route::Users
    }
}
