//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Identifier as sent by the API, which uses both strings and numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Product identifier, opaque to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawId")]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty or only whitespace, and so cannot key a cart line.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Image shown on the product detail view
    pub image_url: Option<String>,
}

impl<'a> Product<'a> {
    /// Create a product with no description or image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: None,
        }
    }

    /// Set the product description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the product image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_id_accepts_numbers_and_strings() -> TestResult {
        let ids: Vec<ProductId> = serde_json::from_str(r#"["abc", 42]"#)?;

        assert_eq!(ids, [ProductId::from("abc"), ProductId::from(42)]);

        Ok(())
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(ProductId::from("").is_blank());
        assert!(ProductId::from("  ").is_blank());
        assert!(!ProductId::from("a").is_blank());
    }

    #[test]
    fn builder_sets_display_fields() {
        let product = Product::new("apple", "Apple", Money::from_minor(75, GBP))
            .with_description("Crisp")
            .with_image_url("https://img.example/apple.jpg");

        assert_eq!(product.id.as_str(), "apple");
        assert_eq!(product.description, "Crisp");
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://img.example/apple.jpg")
        );
    }
}
