//! Fixtures
//!
//! YAML catalogs standing in for the storefront API: `<base>/products/<set>.yml` and
//! `<base>/orders/<set>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::{orders::OrdersFixture, products::ProductsFixture},
    orders::Order,
    products::Product,
};

pub mod orders;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Catalog rejected a product
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products in listing order
    products: Vec<Product<'a>>,

    /// Orders in listing order
    orders: Vec<Order>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            orders: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for product_fixture in fixture.products {
            // Parse to get currency first (before creating Product)
            let currency = products::parse_price(&product_fixture.price)?.currency();

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product: Product<'a> = product_fixture.try_into()?;

            self.products.push(product);
        }

        debug!(
            path = %file_path.display(),
            products = self.products.len(),
            "loaded product fixtures"
        );

        Ok(self)
    }

    /// Load orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if an order references a product
    /// that has not been loaded.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        for order_fixture in fixture.orders {
            if let Some(missing) = order_fixture
                .products
                .iter()
                .find(|id| !self.has_product(id))
            {
                return Err(FixtureError::ProductNotFound(missing.clone()));
            }

            self.orders.push(order_fixture.into());
        }

        debug!(
            path = %file_path.display(),
            orders = self.orders.len(),
            "loaded order fixtures"
        );

        Ok(self)
    }

    /// Load a complete fixture set (products and orders with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// Get a product by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, FixtureError> {
        self.products
            .iter()
            .find(|product| product.id.as_str() == id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Products loaded so far, in file order
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Orders loaded so far, in file order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Get the currency of the loaded products
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Build a catalog from the loaded products and orders
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded or the catalog rejects a product.
    pub fn catalog(&self) -> Result<Catalog<'a>, FixtureError> {
        let mut catalog = Catalog::new(self.currency()?);

        for product in &self.products {
            catalog.insert_product(product.clone())?;
        }

        for order in &self.orders {
            catalog.insert_order(order.clone());
        }

        Ok(catalog)
    }

    fn has_product(&self, id: &str) -> bool {
        self.products.iter().any(|product| product.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusty_money::{Money, iso::GBP};
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::orders::OrderStatus;

    use super::*;

    fn write_fixture(base: &Path, kind: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(kind);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    const PRODUCTS: &str = "
products:
  - id: tea
    name: Tea
    description: Loose leaf
    price: 4.25 GBP
  - id: mug
    name: Mug
    price: 8.00 GBP
    image: https://img.example/mug.jpg
";

    #[test]
    fn loads_products_and_orders_in_file_order() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(dir.path(), "products", "shop", PRODUCTS)?;
        write_fixture(
            dir.path(),
            "orders",
            "shop",
            "
orders:
  - id: o-1
    buyer_email: ada@example.com
    products: [tea, mug]
    status: shipped
",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_products("shop")?.load_orders("shop")?;

        let ids: Vec<&str> = fixture.products().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["tea", "mug"]);
        assert_eq!(fixture.currency()?, GBP);
        assert_eq!(fixture.product("mug")?.price, Money::from_minor(800, GBP));
        assert_eq!(
            fixture.orders().first().map(|order| order.status),
            Some(OrderStatus::Shipped)
        );

        let catalog = fixture.catalog()?;

        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.orders().len(), 1);

        Ok(())
    }

    #[test]
    fn order_with_unknown_product_errors() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(dir.path(), "products", "shop", PRODUCTS)?;
        write_fixture(
            dir.path(),
            "orders",
            "shop",
            "
orders:
  - id: o-1
    buyer_email: ada@example.com
    products: [teapot]
    status: pending
",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_products("shop")?;

        let result = fixture.load_orders("shop");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(id)) if id == "teapot"));

        Ok(())
    }

    #[test]
    fn mixed_currencies_error() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "products",
            "mixed",
            "
products:
  - id: a
    name: A
    price: 1.00 GBP
  - id: b
    name: B
    price: 1.00 USD
",
        )?;

        let result = Fixture::with_base_path(dir.path())
            .load_products("mixed")
            .map(|_fixture| ());

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "GBP" && found == "USD"
        ));

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Fixture::with_base_path("/nonexistent")
            .load_products("none")
            .map(|_fixture| ());

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn empty_fixture_has_no_currency() {
        let fixture = Fixture::with_base_path("unused");

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
        assert!(matches!(fixture.catalog(), Err(FixtureError::NoCurrency)));
    }
}
