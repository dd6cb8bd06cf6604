mod catalog;
mod products;
mod routes;

use clap::{Parser, Subcommand};
use storefront_client::StorefrontClient;
use storefront_store::CatalogStore;
use tracing_subscriber::EnvFilter;

use crate::catalog::ProductFilter;
use crate::products::UpdateArgs;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List product groups
    Groups,
    /// List categories, optionally only those in one group
    Categories {
        /// Group name, matched exactly
        #[arg(long)]
        group: Option<String>,
    },
    /// List promotions
    Promotions,
    /// List products, optionally filtered
    Products {
        /// Only products in the group with this name
        #[arg(long, conflicts_with_all = ["category", "popular"])]
        group: Option<String>,
        /// Only products in this category
        #[arg(long, conflicts_with = "popular")]
        category: Option<i64>,
        /// Only products that sold more than 10 units
        #[arg(long)]
        popular: bool,
    },
    /// Print the category menu
    Menu,
    /// Render the page for a storefront path, e.g. `/products/3`
    Show { path: String },
    /// Update fields of one product
    Update {
        id: i64,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete one product
    Delete { id: i64 },
    /// Delete every product
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl Commands {
    /// Whether the command renders catalog data and so needs a full refresh first.
    fn reads_catalog(&self) -> bool {
        !matches!(
            self,
            Commands::Update { .. } | Commands::Delete { .. } | Commands::DeleteAll { .. }
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = storefront_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, api = %config.api_base_url, "starting storefront cli");

    let client = StorefrontClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let mut store = CatalogStore::new(client);

    let Some(command) = cli.command else {
        store.fetch_all().await;
        catalog::print_status(&store);
        return Ok(());
    };

    if command.reads_catalog() {
        store.fetch_all().await;
    }

    match command {
        Commands::Groups => catalog::print_groups(&store),
        Commands::Categories { group } => catalog::print_categories(&store, group.as_deref()),
        Commands::Promotions => catalog::print_promotions(&store),
        Commands::Products {
            group,
            category,
            popular,
        } => {
            let filter = match (group, category, popular) {
                (Some(name), _, _) => ProductFilter::Group(name),
                (None, Some(id), _) => ProductFilter::Category(id),
                (None, None, true) => ProductFilter::Popular,
                (None, None, false) => ProductFilter::All,
            };
            catalog::print_products(&store, &filter);
        }
        Commands::Menu => catalog::print_menu(&store),
        Commands::Show { path } => catalog::print_route(&store, &path),
        Commands::Update { id, fields } => products::run_update(&mut store, id, fields).await?,
        Commands::Delete { id } => products::run_delete(&mut store, id).await?,
        Commands::DeleteAll { yes } => products::run_delete_all(&mut store, yes).await?,
    }

    Ok(())
}
