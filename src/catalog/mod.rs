//! Catalog
//!
//! Read-only product and order data as supplied by the storefront API.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    orders::Order,
    products::{Product, ProductId},
};

pub mod pages;
pub mod records;

pub use pages::{DEFAULT_PAGE_LIMIT, PageRequest};

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The API response was not valid JSON for the expected record.
    #[error("Failed to decode API record: {0}")]
    Json(#[from] serde_json::Error),

    /// A product record has a price below zero.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    /// A product's currency differs from the catalog currency (product, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Two products share an id.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(ProductId),
}

/// Products and orders for one storefront.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    positions: FxHashMap<ProductId, usize>,
    orders: Vec<Order>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: Vec::new(),
            positions: FxHashMap::default(),
            orders: Vec::new(),
            currency,
        }
    }

    /// Add a product to the end of the listing.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CatalogError::DuplicateProduct`]: a product with the same id is already listed.
    pub fn insert_product(&mut self, product: Product<'a>) -> Result<(), CatalogError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if self.positions.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        self.positions.insert(product.id.clone(), self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Add an order to the order list.
    pub fn insert_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product<'a>> {
        self.positions
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Every product, in listing order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// One page of the product listing.
    pub fn page(&self, page: PageRequest) -> &[Product<'a>] {
        page.slice(&self.products)
    }

    /// Every order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Catalog<'static> {
    /// Append products decoded from an API listing response.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the response cannot be decoded or a product is rejected.
    pub fn extend_from_json(&mut self, json: &str) -> Result<&mut Self, CatalogError> {
        for product in records::decode_products(json, self.currency)? {
            self.insert_product(product)?;
        }

        Ok(self)
    }

    /// Append orders decoded from an API order list response.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::Json`] if the response cannot be decoded.
    pub fn extend_orders_from_json(&mut self, json: &str) -> Result<&mut Self, CatalogError> {
        self.orders.extend(records::decode_orders(json)?);

        Ok(self)
    }
}
