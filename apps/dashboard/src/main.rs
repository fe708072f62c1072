//! # Stockroom CLI Entry Point
//!
//! Runs dashboard commands against a freshly opened store and prints the
//! result as pretty JSON on stdout. Logs go to stderr.
//!
//! ```text
//! $ stockroom stats
//! $ stockroom list --search pro --category Eletrônicos --stock available
//! $ stockroom show 2
//! $ stockroom categories --known
//! $ stockroom add --name "Mouse sem fio" --code ms01 --category Eletrônicos --quantity 8 --price 129,90
//! $ stockroom delete 5 --yes
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use stockroom_core::{Money, ProductDraft, StockFilter};
use stockroom_dashboard::commands::{self, ListQuery};
use stockroom_dashboard::{init_tracing, open_store, ApiError};
use stockroom_store::{ProductStore, DELETE_PROMPT};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Inventory dashboard over the in-memory product store")]
struct Cli {
    /// Config file (defaults to $STOCKROOM_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dashboard statistics
    Stats,
    /// Product table, optionally filtered
    List {
        /// Case-insensitive match on name or code
        #[arg(long, default_value = "")]
        search: String,
        /// Exact category
        #[arg(long, default_value = "")]
        category: String,
        /// available | low | out
        #[arg(long)]
        stock: Option<StockFilter>,
    },
    /// One product by id
    Show { id: String },
    /// Categories in use
    Categories {
        /// List the form's category options instead
        #[arg(long, default_value_t = false)]
        known: bool,
    },
    /// Add a product through the "new product" form
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        quantity: i64,
        /// Decimal amount in reais, e.g. `129,90` or `129.90`
        #[arg(long)]
        price: Money,
        #[arg(long, default_value = "")]
        supplier: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete a product after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match open_store(cli.config) {
        Ok(store) => run(&store, cli.command).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match serde_json::to_string_pretty(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(store: &ProductStore, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Stats => print_json(&commands::get_stats(store).await?),
        Command::List {
            search,
            category,
            stock,
        } => {
            let query = ListQuery {
                search,
                category,
                stock: stock.map(|s| s.to_string()).unwrap_or_default(),
            };
            print_json(&commands::list_products(store, query).await?)
        }
        Command::Show { id } => print_json(&commands::get_product(store, id).await?),
        Command::Categories { known: false } => {
            print_json(&commands::list_categories(store).await?)
        }
        Command::Categories { known: true } => {
            print_json(&commands::list_known_categories().await?)
        }
        Command::Add {
            name,
            code,
            category,
            quantity,
            price,
            supplier,
            notes,
        } => {
            let draft = ProductDraft {
                name,
                code,
                category,
                quantity,
                price,
                supplier,
                notes,
            };
            print_json(&commands::create_product(store, draft).await?)
        }
        Command::Delete { id, yes } => {
            let confirmed = yes || ask_confirmation()?;
            let deleted = commands::delete_product(store, id, confirmed).await?;
            print_json(&deleted)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Asks on stderr, reads one line from stdin. Only `s`/`sim`/`y`/`yes` confirm.
fn ask_confirmation() -> Result<bool, ApiError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{DELETE_PROMPT} [s/N] ")
        .and_then(|_| stderr.flush())
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    ))
}
