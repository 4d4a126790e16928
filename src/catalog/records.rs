//! API records
//!
//! JSON shapes returned by the storefront API and their conversion into catalog types.

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    orders::Order,
    pricing::price_in,
    products::{Product, ProductId},
};

/// Image links attached to a product record.
#[derive(Debug, Default, Deserialize)]
pub struct ImageUrls {
    /// Full size image
    #[serde(default)]
    pub regular: Option<String>,

    /// Small image for listings
    #[serde(default)]
    pub small: Option<String>,
}

/// Product as returned by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Product id
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Display name, not always present
    #[serde(default)]
    pub name: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Fallback description
    #[serde(default)]
    pub alt_description: Option<String>,

    /// Price in major units
    pub price: Decimal,

    /// Images
    #[serde(default)]
    pub urls: ImageUrls,
}

impl ProductRecord {
    /// Convert the record into a product priced in `currency`.
    ///
    /// The title falls back from `name` to `description`, then `alt_description`, then the id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NegativePrice`] if the price is below zero. Prices are in major
    /// units and rounded to the currency's exponent.
    pub fn into_product(
        self,
        currency: &'static Currency,
    ) -> Result<Product<'static>, CatalogError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(CatalogError::NegativePrice(self.id));
        }

        let description = self
            .description
            .or(self.alt_description)
            .unwrap_or_default();

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ if !description.is_empty() => description.clone(),
            _ => self.id.to_string(),
        };

        Ok(Product {
            id: self.id,
            name,
            description,
            price: price_in(self.price, currency),
            image_url: self.urls.regular.or(self.urls.small),
        })
    }
}

/// Decode a product listing page.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the JSON is malformed or a price is invalid.
pub fn decode_products(
    json: &str,
    currency: &'static Currency,
) -> Result<Vec<Product<'static>>, CatalogError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;

    records
        .into_iter()
        .map(|record| record.into_product(currency))
        .collect()
}

/// Decode a single product, as shown on the detail view.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the JSON is malformed or the price is invalid.
pub fn decode_product(
    json: &str,
    currency: &'static Currency,
) -> Result<Product<'static>, CatalogError> {
    let record: ProductRecord = serde_json::from_str(json)?;

    record.into_product(currency)
}

/// Decode the order list.
///
/// # Errors
///
/// Returns a [`CatalogError::Json`] if the JSON is malformed.
pub fn decode_orders(json: &str) -> Result<Vec<Order>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
