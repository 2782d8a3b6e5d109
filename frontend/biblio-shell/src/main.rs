//! biblio - library management shell
//!
//! An interactive front end for the library API. One process holds one
//! session: log in once, then browse the catalog, manage loans and users.
//!
//! # Examples
//!
//! ```bash
//! biblio --server http://localhost:3000/api --pretty
//! biblio> login admin@library.test secret
//! biblio> book list --query dune
//! biblio> loan create --book <id> --user <id> --due 2030-01-15
//! ```

mod auth_commands;
mod book_commands;
mod cli;
mod commands;
mod error;
mod loan_commands;
mod logger;
mod shell;
mod terminal;
mod user_commands;

#[cfg(test)]
mod tests;

use crate::{
    cli::Cli,
    error::{Result as ShellErrorResult, ShellError},
    shell::Shell,
    terminal::PromptConfirmer,
};

use biblio_client::{AppContext, Confirmer, NotificationLog, StaticConfirmer};
use biblio_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ShellErrorResult<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let notifications = Arc::new(NotificationLog::new());
    let confirmer: Arc<dyn Confirmer> = if cli.yes {
        Arc::new(StaticConfirmer::always_confirm())
    } else {
        Arc::new(PromptConfirmer)
    };

    let (ctx, router) = AppContext::from_config(&config, notifications.clone(), confirmer)
        .map_err(ShellError::from)?;

    Shell::new(ctx, router, notifications, cli.pretty).run().await
}
