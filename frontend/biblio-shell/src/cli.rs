use clap::Parser;

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "Interactive client for the library management API")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides config and BIBLIO_API_BASE_URL)
    #[arg(long)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub(crate) pretty: bool,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y')]
    pub(crate) yes: bool,
}
