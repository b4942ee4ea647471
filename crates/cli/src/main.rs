//! Aura Scents CLI - Browse the catalog and run the store from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally by category
//! aura-cli catalog list --category women
//!
//! # Show one product
//! aura-cli catalog show 2
//!
//! # Search names and scent notes
//! aura-cli catalog search vanilla
//!
//! # Show the wishlist, toggling product 3 first
//! aura-cli wishlist --toggle 3
//!
//! # Show order history as JSON
//! aura-cli --json orders
//!
//! # Add products to the cart and check out with the sample profile
//! aura-cli checkout --add 2:3 --add 9 --payment paypal
//! ```
//!
//! # Commands
//!
//! - `catalog` - List, show, search and rank products
//! - `wishlist` - Show or edit the wishlist
//! - `orders` - Show order history
//! - `checkout` - Run a scripted cart and checkout session

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aura_scents_core::{Category, PaymentMethod};
use aura_scents_storefront::config::StoreConfig;
use aura_scents_storefront::state::AppState;

mod commands;

use commands::Output;

#[derive(Parser)]
#[command(name = "aura-cli")]
#[command(author, version, about = "Aura Scents store CLI")]
struct Cli {
    /// Print results and logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Show the wishlist
    Wishlist {
        /// Toggle these product IDs before showing the list
        #[arg(short, long)]
        toggle: Vec<String>,
    },
    /// Show order history, newest first
    Orders,
    /// Fill the cart and place an order
    Checkout {
        /// Cart item as `ID` or `ID:QUANTITY` (repeatable)
        #[arg(short = 'a', long = "add", value_name = "ITEM", required = true)]
        items: Vec<String>,

        /// Payment method (`credit-card`, `debit-card`, `paypal`, `bank-transfer`)
        #[arg(short, long)]
        payment: Option<PaymentMethod>,

        /// Full name, overriding the profile
        #[arg(long)]
        name: Option<String>,

        /// Email, overriding the profile
        #[arg(long)]
        email: Option<String>,

        /// Phone, overriding the profile
        #[arg(long)]
        phone: Option<String>,

        /// Street address, overriding the profile
        #[arg(long)]
        address: Option<String>,

        /// City, overriding the profile
        #[arg(long)]
        city: Option<String>,

        /// ZIP code, overriding the profile
        #[arg(long)]
        zip: Option<String>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products in catalog order
    List {
        /// Only show this category (`men`, `women`, `unisex`)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Show a single product
    Show {
        /// Product ID
        id: String,
    },
    /// Search product names and scent notes
    Search {
        /// Text to look for
        query: String,
    },
    /// Show the top-rated products
    Featured {
        /// How many products to show
        #[arg(short, long, default_value_t = 4)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`, JSON-formatted when `json` is set.
fn init_tracing(json: bool) {
    // Defaults to info level for the store if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aura_scents_storefront=info".into());

    // Logs go to stderr so stdout stays clean for command output
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    if !config.splash_delay.is_zero() {
        tokio::time::sleep(config.splash_delay).await;
    }

    let mut state = AppState::new(config)?;
    let out = Output::new(cli.json);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(&state, category, out)?,
            CatalogAction::Show { id } => commands::catalog::show(&state, &id, out)?,
            CatalogAction::Search { query } => commands::catalog::search(&state, &query, out)?,
            CatalogAction::Featured { limit } => {
                commands::catalog::featured(&state, limit, out)?;
            }
        },
        Commands::Wishlist { toggle } => commands::wishlist::show(&mut state, &toggle, out)?,
        Commands::Orders => commands::orders::list(&state, out)?,
        Commands::Checkout {
            items,
            payment,
            name,
            email,
            phone,
            address,
            city,
            zip,
        } => {
            let overrides = commands::checkout::FormOverrides {
                full_name: name,
                email,
                phone,
                address,
                city,
                zip_code: zip,
                payment_method: payment,
            };
            commands::checkout::run(&mut state, &items, overrides, out).await?;
        }
    }
    Ok(())
}
