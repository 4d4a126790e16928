//! Cart store
//!
//! The single owner of a session's cart. Views dispatch intents into it and read the current
//! snapshot back out.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    cart::{CartAction, CartError, CartLineItem, CartState, QuantityUpdate},
    pricing::TotalPriceError,
    products::{Product, ProductId},
};

/// Cart store
#[derive(Debug, Clone)]
pub struct CartStore<'a> {
    state: CartState<'a>,
}

impl<'a> CartStore<'a> {
    /// Create a store holding an empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            state: CartState::new(currency),
        }
    }

    /// Apply an action to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if an add or quantity change is rejected; the cart is left
    /// unchanged.
    pub fn dispatch(&mut self, action: CartAction<'a>) -> Result<(), CartError> {
        match action {
            CartAction::AddItem(product) => self.add_item(product).map(|_quantity| ()),
            CartAction::RemoveItem(id) => {
                self.remove_item(&id);
                Ok(())
            }
            CartAction::UpdateQuantity { product, delta } => {
                self.update_quantity(&product, delta).map(|_update| ())
            }
        }
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidInput`]: the product id is blank.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the line already holds `u32::MAX` units.
    pub fn add_item(&mut self, product: Product<'a>) -> Result<NonZeroU32, CartError> {
        let id = product.id.clone();

        match self.state.add(product) {
            Ok(quantity) => {
                debug!(product = %id, quantity = quantity.get(), "added item to cart");

                Ok(quantity)
            }
            Err(error) => {
                warn!(product = %id, %error, "rejected cart item");

                Err(error)
            }
        }
    }

    /// Remove a product's line. Removing a product that is not in the cart does nothing.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.state.remove(id).is_some() {
            debug!(product = %id, "removed item from cart");
        } else {
            debug!(product = %id, "remove ignored, item not in cart");
        }
    }

    /// Change a line's quantity by `delta`, removing it when the quantity would reach zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity would exceed `u32::MAX`.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        delta: i64,
    ) -> Result<QuantityUpdate, CartError> {
        let update = self.state.update_quantity(id, delta).inspect_err(|error| {
            warn!(product = %id, delta, %error, "rejected quantity update");
        })?;

        match update {
            QuantityUpdate::Updated(quantity) => {
                debug!(product = %id, delta, quantity = quantity.get(), "updated cart quantity");
            }
            QuantityUpdate::Removed => {
                debug!(product = %id, delta, "quantity reached zero, removed item from cart");
            }
            QuantityUpdate::Missing => {
                debug!(product = %id, delta, "quantity update ignored, item not in cart");
            }
        }

        Ok(update)
    }

    /// Lines in the order products were first added.
    pub fn items(&self) -> Vec<&CartLineItem<'a>> {
        self.state.items()
    }

    /// Total price of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the exact sum does not fit in a decimal amount.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.state.total()
    }

    /// Number of units in the cart, for the cart badge.
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// The current cart.
    pub fn state(&self) -> &CartState<'a> {
        &self.state
    }

    /// Take the cart out of the store.
    pub fn into_state(self) -> CartState<'a> {
        self.state
    }
}
