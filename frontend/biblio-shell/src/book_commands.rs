use biblio_client::Route;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum BookCommands {
    /// List the catalog, optionally filtered
    List {
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Show one book
    Get { id: String },

    /// Add a book (administrators)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        category: String,
        #[arg(long, allow_negative_numbers = true)]
        stock: i64,
    },

    /// Change a book (administrators); omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i64>,
    },

    /// Remove a book (administrators)
    Delete { id: String },
}

impl BookCommands {
    pub(crate) fn route(&self) -> Route {
        match self {
            BookCommands::List { .. } | BookCommands::Get { .. } | BookCommands::Delete { .. } => {
                Route::Books
            }
            BookCommands::Create { .. } => Route::BookNew,
            BookCommands::Edit { id, .. } => Route::BookEdit(id.clone()),
        }
    }
}
