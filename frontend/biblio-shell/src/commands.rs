use crate::{
    auth_commands::AuthCommands, book_commands::BookCommands, loan_commands::LoanCommands,
    user_commands::UserCommands,
};

use biblio_client::Route;

use clap::{Parser, Subcommand};

/// One line typed at the prompt
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
#[command(disable_version_flag = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    #[command(flatten)]
    Auth(AuthCommands),

    /// Show the navigation bar for the current session
    Nav,

    /// Navigate to a path, applying route guards
    Go {
        /// e.g. /books, /users, /books/edit/<id>
        path: String,
    },

    /// Catalog operations
    Book {
        #[command(subcommand)]
        action: BookCommands,
    },

    /// Loan operations
    Loan {
        #[command(subcommand)]
        action: LoanCommands,
    },

    /// User administration
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl Commands {
    /// Screen the command belongs to; guards run before it executes.
    pub(crate) fn route(&self) -> Option<Route> {
        match self {
            Commands::Auth(action) => action.route(),
            Commands::Nav | Commands::Go { .. } | Commands::Quit => None,
            Commands::Book { action } => Some(action.route()),
            Commands::Loan { action } => Some(action.route()),
            Commands::User { action } => Some(action.route()),
        }
    }
}
