//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartLineItem;

/// Errors that can occur while calculating a line or cart total.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Builds a price from a major-unit amount (e.g. `2.99`), rounded to the currency's exponent.
///
/// `500` is ¥500 in JPY, £500.00 in GBP and 500.000 BHD.
pub fn price_in(amount: Decimal, currency: &Currency) -> Money<'_, Currency> {
    Money::from_decimal(amount.round_dp(currency.exponent), currency)
}

/// Price of a cart line: unit price times quantity.
///
/// # Errors
///
/// Returns [`TotalPriceError::Money`] if the product does not fit in a decimal amount.
pub fn line_total<'a>(item: &CartLineItem<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    Ok(item.unit_price().mul(item.quantity().get())?)
}

/// Calculates the total price of a list of cart lines; an empty list totals zero.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: a line is priced in a currency other than `currency`, or the sum
///   does not fit in a decimal amount.
pub fn total_price<'a, 'b>(
    currency: &'a Currency,
    items: impl IntoIterator<Item = &'b CartLineItem<'a>>,
) -> Result<Money<'a, Currency>, TotalPriceError>
where
    'a: 'b,
{
    let total = items
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            Ok::<_, TotalPriceError>(acc.add(line_total(item)?)?)
        })?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{BHD, GBP, JPY, USD};
    use testresult::TestResult;

    use crate::{cart::CartState, products::Product};

    use super::*;

    #[test]
    fn price_in_respects_currency_exponent() {
        assert_eq!(price_in(Decimal::new(299, 2), GBP), Money::from_minor(299, GBP));
        assert_eq!(price_in(Decimal::new(500, 0), JPY), Money::from_major(500, JPY));
        assert_eq!(price_in(Decimal::new(1234, 1), BHD), Money::from_minor(123_400, BHD));
    }

    #[test]
    fn price_in_rounds_to_minor_units() {
        assert_eq!(price_in(Decimal::new(12346, 3), GBP), Money::from_minor(1235, GBP));
        assert_eq!(price_in(Decimal::new(4996, 1), JPY), Money::from_major(500, JPY));
    }

    #[test]
    fn line_total_multiplies_by_quantity() -> TestResult {
        let mut cart = CartState::new(GBP);
        let apple = Product::new("apple", "Apple", Money::from_minor(75, GBP));

        cart.add(apple.clone())?;
        cart.add(apple)?;

        let line = cart.get(&"apple".into()).ok_or("missing line")?;

        assert_eq!(line_total(line)?, Money::from_minor(150, GBP));

        Ok(())
    }

    #[test]
    fn total_price_sums_lines() -> TestResult {
        let mut cart = CartState::new(USD);

        cart.add(Product::new("a", "A", Money::from_minor(1000, USD)))?;
        cart.add(Product::new("b", "B", Money::from_minor(500, USD)))?;
        cart.add(Product::new("a", "A", Money::from_minor(1000, USD)))?;

        assert_eq!(total_price(USD, cart.iter())?, Money::from_minor(2500, USD));

        Ok(())
    }

    #[test]
    fn total_price_is_exact_beyond_minor_unit_range() -> TestResult {
        let mut cart = CartState::new(GBP);
        let expensive = Product::new("a", "A", Money::from_minor(i64::MAX, GBP));

        cart.add(expensive.clone())?;
        cart.add(expensive)?;

        let expected = Decimal::new(i64::MAX, 2) * Decimal::TWO;

        assert_eq!(total_price(GBP, cart.iter())?, Money::from_decimal(expected, GBP));

        Ok(())
    }

    #[test]
    fn total_price_overflow_is_an_error() -> TestResult {
        let mut cart = CartState::new(GBP);

        cart.add(Product::new("a", "A", Money::from_decimal(Decimal::MAX, GBP)))?;
        cart.add(Product::new("b", "B", Money::from_decimal(Decimal::MAX, GBP)))?;

        assert_eq!(
            total_price(GBP, cart.iter()),
            Err(TotalPriceError::Money(MoneyError::Overflow))
        );

        Ok(())
    }

    #[test]
    fn total_price_empty() -> TestResult {
        let items: [CartLineItem<'static>; 0] = [];

        assert_eq!(total_price(GBP, &items)?, Money::from_minor(0, GBP));

        Ok(())
    }
}
