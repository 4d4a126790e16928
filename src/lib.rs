//! Storefront
//!
//! Storefront is the client-side cart store for a small online shop: an ordered, currency-aware
//! cart driven by reducer actions, plus catalog records, YAML fixtures and terminal views.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod summary;
