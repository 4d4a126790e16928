//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;

use crate::products::{ProductId, RawId};

/// Order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct OrderId(String);

impl OrderId {
    /// Create an order id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<RawId> for OrderId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

/// Order fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet picked up
    Pending,

    /// Being prepared
    Processing,

    /// Handed to the carrier
    Shipped,

    /// Delivered
    Completed,

    /// Cancelled by the buyer or the store
    Cancelled,

    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        })
    }
}

/// A placed order, as listed on the orders view.
///
/// Deserializes directly from the API record (`_id`, `buyerEmail`, `products`, `status`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    #[serde(rename = "_id")]
    pub id: OrderId,

    /// Email address of the buyer
    pub buyer_email: String,

    /// Products in the order
    #[serde(default)]
    pub products: Vec<ProductId>,

    /// Fulfilment status
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_deserializes_from_api_record() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{
                "_id": "ord-1",
                "buyerEmail": "ada@example.com",
                "products": ["apple", 7],
                "status": "shipped"
            }"#,
        )?;

        assert_eq!(order.id, OrderId::from("ord-1"));
        assert_eq!(order.buyer_email, "ada@example.com");
        assert_eq!(order.products, [ProductId::from("apple"), ProductId::from(7)]);
        assert_eq!(order.status, OrderStatus::Shipped);

        Ok(())
    }

    #[test]
    fn unrecognised_status_is_unknown() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{"_id": 9, "buyerEmail": "b@example.com", "status": "lost-in-post"}"#,
        )?;

        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(order.products.is_empty());
        assert_eq!(order.id.as_str(), "9");

        Ok(())
    }
}
