use biblio_client::Route;

use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum LoanCommands {
    /// All loans for administrators, your own otherwise
    List,

    /// Lend a book (administrators)
    Create {
        #[arg(long)]
        book: String,
        #[arg(long)]
        user: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: NaiveDate,
    },

    /// Mark a loan as returned (administrators)
    Return { id: String },
}

impl LoanCommands {
    pub(crate) fn route(&self) -> Route {
        match self {
            LoanCommands::List | LoanCommands::Return { .. } => Route::Loans,
            LoanCommands::Create { .. } => Route::LoanNew,
        }
    }
}
