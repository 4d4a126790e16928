//! Cart
//!
//! The cart is a mapping of product id to line item plus the order in which products were
//! first added. Both always hold exactly the same set of ids.

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{TotalPriceError, total_price},
    products::{Product, ProductId},
};

pub mod actions;
pub mod shared;
pub mod store;

pub use actions::{CartAction, reduce};
pub use shared::SharedCartStore;
pub use store::CartStore;

/// Errors raised when changing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The product has no usable identifier.
    #[error("Product has no usable identifier")]
    InvalidInput,

    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The line's quantity would exceed `u32::MAX`.
    #[error("Quantity of product {0} is out of range")]
    QuantityOverflow(ProductId),
}

/// Outcome of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// No line item exists for the product; nothing changed.
    Missing,

    /// The line item now has this quantity.
    Updated(NonZeroU32),

    /// The quantity would have dropped to zero or below, so the line item was removed.
    Removed,
}

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem<'a> {
    product: Product<'a>,
    quantity: NonZeroU32,
}

impl<'a> CartLineItem<'a> {
    /// Product id of the line
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Product as it was when first added, including display fields
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Unit price snapshot taken when the product was first added
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.product.price
    }

    /// Quantity, always at least one
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

/// Cart contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState<'a> {
    lines: FxHashMap<ProductId, CartLineItem<'a>>,
    order: Vec<ProductId>,
    currency: &'static Currency,
}

impl<'a> CartState<'a> {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: FxHashMap::default(),
            order: Vec::new(),
            currency,
        }
    }

    /// Apply a single action in place.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if an added product is rejected; the cart is left unchanged.
    pub fn apply(&mut self, action: CartAction<'a>) -> Result<(), CartError> {
        match action {
            CartAction::AddItem(product) => {
                self.add(product)?;
            }
            CartAction::RemoveItem(id) => {
                self.remove(&id);
            }
            CartAction::UpdateQuantity { product, delta } => {
                self.update_quantity(&product, delta)?;
            }
        }

        Ok(())
    }

    /// Add one unit of a product, returning the line's new quantity.
    ///
    /// A product already in the cart keeps its position and its original price snapshot.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidInput`]: the product id is blank.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the line already holds `u32::MAX` units.
    pub fn add(&mut self, product: Product<'a>) -> Result<NonZeroU32, CartError> {
        if product.id.is_blank() {
            return Err(CartError::InvalidInput);
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.lines.get_mut(&product.id) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(CartError::QuantityOverflow(product.id))?;

            return Ok(line.quantity);
        }

        self.order.push(product.id.clone());
        self.lines.insert(
            product.id.clone(),
            CartLineItem {
                product,
                quantity: NonZeroU32::MIN,
            },
        );

        Ok(NonZeroU32::MIN)
    }

    /// Remove a product's line, returning it if it was present.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLineItem<'a>> {
        let line = self.lines.remove(id)?;

        self.order.retain(|existing| existing != id);

        Some(line)
    }

    /// Change a line's quantity by a signed delta.
    ///
    /// Lines whose quantity would reach zero or below are removed. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity would exceed `u32::MAX`; the line
    /// is left unchanged.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        delta: i64,
    ) -> Result<QuantityUpdate, CartError> {
        let Some(current) = self.lines.get(id).map(CartLineItem::quantity) else {
            return Ok(QuantityUpdate::Missing);
        };

        let next = i64::from(current.get()).saturating_add(delta);

        if next <= 0 {
            self.remove(id);

            return Ok(QuantityUpdate::Removed);
        }

        let quantity = u32::try_from(next)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

        if let Some(line) = self.lines.get_mut(id) {
            line.quantity = quantity;
        }

        Ok(QuantityUpdate::Updated(quantity))
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem<'a>> {
        self.lines.get(id)
    }

    /// Iterate over lines in the order products were first added.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem<'a>> {
        self.order.iter().filter_map(|id| self.lines.get(id))
    }

    /// Lines in the order products were first added.
    pub fn items(&self) -> Vec<&CartLineItem<'a>> {
        self.iter().collect()
    }

    /// Product ids in the order they were first added.
    pub fn ids(&self) -> &[ProductId] {
        &self.order
    }

    /// Sum of unit price times quantity over every line; zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the exact sum does not fit in a decimal amount.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(self.currency, self.iter())
    }

    /// Number of units in the cart, counting quantities.
    pub fn item_count(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
