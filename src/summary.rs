//! Summary
//!
//! Terminal tables for the cart, product listing and order list.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::CartState,
    catalog::PageRequest,
    orders::Order,
    pricing::{TotalPriceError, line_total},
    products::{Product, ProductId},
};

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),

    /// A line or cart total could not be computed.
    #[error("Failed to price cart: {0}")]
    Price(#[from] TotalPriceError),
}

/// Write the cart as a table followed by its item count and total.
///
/// # Errors
///
/// Returns a [`SummaryError`] if a total cannot be computed or writing to `out` fails.
pub fn write_cart(mut out: impl io::Write, cart: &CartState<'_>) -> Result<(), SummaryError> {
    if cart.is_empty() {
        writeln!(out, "\nYour cart is empty.")?;
    } else {
        let mut builder = Builder::default();

        builder.push_record(["Product", "Quantity", "Unit Price", "Price"]);

        for line in cart.iter() {
            builder.push_record([
                line.product().name.clone(),
                line.quantity().to_string(),
                line.unit_price().to_string(),
                line_total(line)?.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}")?;
    }

    writeln!(out, " Items: {}", cart.item_count())?;
    writeln!(out, " Total: {}", cart.total()?)?;

    Ok(())
}

/// Write one page of the product listing.
///
/// # Errors
///
/// Returns a [`SummaryError`] if writing to `out` fails.
pub fn write_products(
    mut out: impl io::Write,
    products: &[Product<'_>],
    page: PageRequest,
) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Product", "Price"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.price.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "\n{table}")?;
    writeln!(
        out,
        " Showing {} from offset {} (limit {})",
        products.len(),
        page.offset,
        page.limit
    )?;

    Ok(())
}

/// Write the detail view of a single product.
///
/// # Errors
///
/// Returns a [`SummaryError`] if writing to `out` fails.
pub fn write_product(mut out: impl io::Write, product: &Product<'_>) -> Result<(), SummaryError> {
    writeln!(out, "\n{}", product.name)?;

    if !product.description.is_empty() && product.description != product.name {
        writeln!(out, "{}", product.description)?;
    }

    writeln!(out, "Price: {}", product.price)?;

    if let Some(image_url) = &product.image_url {
        writeln!(out, "Image: {image_url}")?;
    }

    Ok(())
}

/// Write the order list.
///
/// # Errors
///
/// Returns a [`SummaryError`] if writing to `out` fails.
pub fn write_orders(mut out: impl io::Write, orders: &[Order]) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Order ID", "Buyer Email", "Products", "Status"]);

    for order in orders {
        let products: Vec<&str> = order.products.iter().map(ProductId::as_str).collect();

        builder.push_record([
            order.id.to_string(),
            order.buyer_email.clone(),
            products.join(", "),
            order.status.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "\n{table}")?;

    Ok(())
}
