//! Shared cart store
//!
//! A cart that can be dispatched to from several threads. Writers are serialized behind a lock
//! and publish each new cart as an immutable snapshot; readers load the latest snapshot without
//! waiting on writers.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    cart::{CartAction, CartError, CartLineItem, CartState, reduce},
    pricing::TotalPriceError,
    products::{Product, ProductId},
};

#[derive(Debug)]
struct Inner {
    snapshot: ArcSwap<CartState<'static>>,
    writer: Mutex<()>,
}

/// Cart store shared between threads.
///
/// Cloning gives another handle to the same cart.
#[derive(Debug, Clone)]
pub struct SharedCartStore {
    inner: Arc<Inner>,
}

impl SharedCartStore {
    /// Create a shared store holding an empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            inner: Arc::new(Inner {
                snapshot: ArcSwap::from_pointee(CartState::new(currency)),
                writer: Mutex::new(()),
            }),
        }
    }

    /// Apply an action and publish the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if an add or quantity change is rejected; nothing is published.
    pub fn dispatch(&self, action: CartAction<'static>) -> Result<(), CartError> {
        let kind = action.kind();
        let product = action.product_id().clone();

        let _writer = self.inner.writer.lock();
        let current = self.inner.snapshot.load();

        match reduce(&current, action) {
            Ok(next) => {
                self.inner.snapshot.store(Arc::new(next));

                debug!(action = kind, %product, "published cart snapshot");

                Ok(())
            }
            Err(error) => {
                warn!(action = kind, %product, %error, "rejected cart action");

                Err(error)
            }
        }
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product is rejected.
    pub fn add_item(&self, product: Product<'static>) -> Result<(), CartError> {
        self.dispatch(CartAction::AddItem(product))
    }

    /// Remove a product's line; absent products are ignored.
    pub fn remove_item(&self, id: &ProductId) {
        // Removal never fails; the error arm only logs.
        if let Err(error) = self.dispatch(CartAction::RemoveItem(id.clone())) {
            warn!(%error, "unexpected cart error");
        }
    }

    /// Change a line's quantity by `delta`, removing it when the quantity would reach zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity would exceed `u32::MAX`.
    pub fn update_quantity(&self, id: &ProductId, delta: i64) -> Result<(), CartError> {
        self.dispatch(CartAction::UpdateQuantity {
            product: id.clone(),
            delta,
        })
    }

    /// The latest published cart.
    pub fn snapshot(&self) -> Arc<CartState<'static>> {
        self.inner.snapshot.load_full()
    }

    /// Lines of the latest cart, in the order products were first added.
    pub fn items(&self) -> Vec<CartLineItem<'static>> {
        self.inner.snapshot.load().iter().cloned().collect()
    }

    /// Total price of the latest cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the exact sum does not fit in a decimal amount.
    pub fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        self.inner.snapshot.load().total()
    }

    /// Number of units in the latest cart.
    pub fn item_count(&self) -> u64 {
        self.inner.snapshot.load().item_count()
    }
}
