//! Cart actions and the reducer that applies them.

use crate::{
    cart::{CartError, CartState},
    products::{Product, ProductId},
};

/// An intent dispatched to the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction<'a> {
    /// Add one unit of a product.
    AddItem(Product<'a>),

    /// Remove a product's line entirely.
    RemoveItem(ProductId),

    /// Change a line's quantity by a signed amount.
    UpdateQuantity {
        /// Product whose line is changed
        product: ProductId,

        /// Amount to add to the current quantity, may be negative
        delta: i64,
    },
}

impl CartAction<'_> {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
        }
    }

    /// Product the action targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartAction::AddItem(product) => &product.id,
            CartAction::RemoveItem(id) | CartAction::UpdateQuantity { product: id, .. } => id,
        }
    }
}

/// Computes the cart that results from applying `action` to `state`.
///
/// `state` is not modified, so a rejected action leaves the caller's cart intact.
///
/// # Errors
///
/// Returns a [`CartError`] if the action adds a product the cart cannot accept or pushes a
/// quantity out of range.
pub fn reduce<'a>(
    state: &CartState<'a>,
    action: CartAction<'a>,
) -> Result<CartState<'a>, CartError> {
    let mut next = state.clone();

    next.apply(action)?;

    Ok(next)
}
