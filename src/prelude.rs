//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CartAction, CartError, CartLineItem, CartState, CartStore, QuantityUpdate,
        SharedCartStore, reduce,
    },
    catalog::{Catalog, CatalogError, DEFAULT_PAGE_LIMIT, PageRequest},
    fixtures::{Fixture, FixtureError},
    orders::{Order, OrderId, OrderStatus},
    pricing::{TotalPriceError, line_total, price_in, total_price},
    products::{Product, ProductId},
    summary::{SummaryError, write_cart, write_orders, write_product, write_products},
};
