//! Order Fixtures

use serde::Deserialize;

use crate::orders::{Order, OrderId, OrderStatus};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders in listing order
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order id
    pub id: String,

    /// Buyer email
    pub buyer_email: String,

    /// Product ids, which must exist in the matching products fixture
    #[serde(default)]
    pub products: Vec<String>,

    /// Order status
    pub status: OrderStatus,
}

impl From<OrderFixture> for Order {
    fn from(fixture: OrderFixture) -> Self {
        Order {
            id: OrderId::new(fixture.id),
            buyer_email: fixture.buyer_email,
            products: fixture.products.into_iter().map(Into::into).collect(),
            status: fixture.status,
        }
    }
}
