mod args;
mod attributes;
mod products;
mod skus;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::args::{AttributeSpec, ModelPrice, ModelStock};

#[derive(Debug, Parser)]
#[command(name = "catadmin")]
#[command(about = "Catalog administration: attributes, products and SKU matrices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage attribute definitions
    Attributes {
        #[command(subcommand)]
        command: AttributeCommands,
    },
    /// List and create products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Work with SKU matrices offline
    Skus {
        #[command(subcommand)]
        command: SkuCommands,
    },
}

#[derive(Debug, Subcommand)]
enum AttributeCommands {
    /// List every attribute and its values
    List,
    /// Create an attribute
    Create {
        #[arg(long)]
        name: String,
        /// Repeat for each value; blank values are dropped
        #[arg(long = "value")]
        values: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ProductCommands {
    /// List one page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Build a product from attribute selections and submit it
    Create {
        #[arg(long)]
        name: String,
        /// `NAME=value1,value2`; order decides model layout
        #[arg(long = "attribute", value_parser = args::parse_attribute_spec)]
        attributes: Vec<AttributeSpec>,
        /// `MODEL=price`, e.g. `"Red / S=9.99"`
        #[arg(long = "price", value_parser = args::parse_model_price)]
        prices: Vec<ModelPrice>,
        /// `MODEL=count`, e.g. `"Red / S=12"`
        #[arg(long = "stock", value_parser = args::parse_model_stock)]
        stocks: Vec<ModelStock>,
        /// Print the SKU table without submitting
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Subcommand)]
enum SkuCommands {
    /// Print the SKU matrix for a set of attribute selections
    Preview {
        #[arg(long = "attribute", value_parser = args::parse_attribute_spec)]
        attributes: Vec<AttributeSpec>,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = catadmin_core::load_app_config();
    init_tracing(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    match cli.command {
        Commands::Skus {
            command: SkuCommands::Preview { attributes },
        } => skus::run_preview(&attributes),
        Commands::Attributes { command } => {
            let config = config.context("failed to load configuration")?;
            match command {
                AttributeCommands::List => attributes::run_list(&config).await,
                AttributeCommands::Create { name, values } => {
                    attributes::run_create(&config, &name, values).await
                }
            }
        }
        Commands::Products { command } => {
            let config = config.context("failed to load configuration")?;
            match command {
                ProductCommands::List { page } => products::run_list(&config, page).await,
                ProductCommands::Create {
                    name,
                    attributes,
                    prices,
                    stocks,
                    dry_run,
                } => {
                    let request = products::CreateRequest {
                        name,
                        attributes,
                        prices,
                        stocks,
                    };
                    products::run_create(&config, &request, dry_run).await
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
