use biblio_client::Route;
use biblio_core::Role;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum AuthCommands {
    /// Log in with email and password
    Login { email: String, password: String },

    /// Create an account and log in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// admin or student
        #[arg(long, default_value = "student")]
        role: Role,
    },

    /// End the session
    Logout,

    /// Print the identity held by the session
    Whoami,

    /// Reload the identity from the backend
    Profile,
}

impl AuthCommands {
    pub(crate) fn route(&self) -> Option<Route> {
        match self {
            AuthCommands::Login { .. } => Some(Route::Login),
            AuthCommands::Register { .. } => Some(Route::Register),
            AuthCommands::Logout | AuthCommands::Whoami | AuthCommands::Profile => None,
        }
    }
}
