use std::{io, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use storefront::{
    cart::{CartError, CartStore},
    catalog::{Catalog, DEFAULT_PAGE_LIMIT, PageRequest},
    fixtures::{Fixture, FixtureError},
    products::ProductId,
    summary::{SummaryError, write_cart, write_orders, write_product, write_products},
};
use thiserror::Error;
use tracing::debug;

use crate::logging::LoggingArgs;

mod actions;

use actions::{CartCommand, CartCommandError};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    /// Fixture source settings.
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Directory holding `products/<set>.yml` and `orders/<set>.yml`
    #[arg(long, env = "STOREFRONT_FIXTURES", default_value = "./fixtures", global = true)]
    fixtures: PathBuf,

    /// Fixture set name
    #[arg(long, env = "STOREFRONT_FIXTURE_SET", default_value = "demo", global = true)]
    set: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List one page of products
    Products {
        /// Number of products to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: usize,
    },

    /// Show a single product
    Product {
        /// Product id
        id: String,
    },

    /// List orders
    Orders,

    /// Replay cart actions (`add=<id>`, `remove=<id>`, `update=<id>:<delta>`) and show the cart
    Cart {
        /// Actions, applied in order
        actions: Vec<CartCommand>,
    },
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Command(#[from] CartCommandError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

impl SourceArgs {
    fn catalog(&self) -> Result<Catalog<'static>, FixtureError> {
        let mut fixture = Fixture::with_base_path(&self.fixtures);

        fixture.load_products(&self.set)?.load_orders(&self.set)?;

        fixture.catalog()
    }
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) fn run(self) -> Result<(), CliError> {
        self.write_to(io::stdout().lock())
    }

    /// Run the command, writing its table to `out`.
    fn write_to(self, out: impl io::Write) -> Result<(), CliError> {
        let catalog = self.source.catalog()?;

        debug!(
            set = %self.source.set,
            products = catalog.products().len(),
            orders = catalog.orders().len(),
            "catalog loaded"
        );

        match self.command {
            Commands::Products { offset, limit } => {
                let page = PageRequest::new(offset, limit);

                write_products(out, catalog.page(page), page)?;
            }
            Commands::Product { id } => {
                let id = ProductId::from(id);
                let product = catalog
                    .product(&id)
                    .ok_or_else(|| CliError::UnknownProduct(id.clone()))?;

                write_product(out, product)?;
            }
            Commands::Orders => write_orders(out, catalog.orders())?,
            Commands::Cart { actions } => {
                let mut store = CartStore::new(catalog.currency());

                for command in actions {
                    store.dispatch(command.into_action(&catalog)?)?;
                }

                write_cart(out, store.state())?;
            }
        }

        Ok(())
    }
}
