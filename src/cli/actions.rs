//! Cart actions given on the command line.

use std::str::FromStr;

use storefront::{cart::CartAction, catalog::Catalog, products::ProductId};
use thiserror::Error;

/// A cart action as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CartCommand {
    /// `add=<id>`
    Add(ProductId),

    /// `remove=<id>`
    Remove(ProductId),

    /// `update=<id>:<delta>`
    Update(ProductId, i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CartCommandError {
    #[error("expected add=<id>, remove=<id> or update=<id>:<delta>, got: {0}")]
    Syntax(String),

    #[error("invalid quantity delta in: {0}")]
    Delta(String),

    #[error("product id is empty in: {0}")]
    EmptyId(String),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

impl FromStr for CartCommand {
    type Err = CartCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((verb, rest)) = s.split_once('=') else {
            return Err(CartCommandError::Syntax(s.to_string()));
        };

        let id = |raw: &str| {
            let raw = raw.trim();

            if raw.is_empty() {
                Err(CartCommandError::EmptyId(s.to_string()))
            } else {
                Ok(ProductId::from(raw))
            }
        };

        match verb {
            "add" => Ok(Self::Add(id(rest)?)),
            "remove" => Ok(Self::Remove(id(rest)?)),
            "update" => {
                let (raw_id, raw_delta) = rest
                    .rsplit_once(':')
                    .ok_or_else(|| CartCommandError::Syntax(s.to_string()))?;

                let delta = raw_delta
                    .trim()
                    .parse::<i64>()
                    .map_err(|_err| CartCommandError::Delta(s.to_string()))?;

                Ok(Self::Update(id(raw_id)?, delta))
            }
            _ => Err(CartCommandError::Syntax(s.to_string())),
        }
    }
}

impl CartCommand {
    /// Resolve into a dispatchable action. Only adds need the product record.
    pub(crate) fn into_action<'a>(
        self,
        catalog: &Catalog<'a>,
    ) -> Result<CartAction<'a>, CartCommandError> {
        match self {
            Self::Add(id) => catalog
                .product(&id)
                .cloned()
                .map(CartAction::AddItem)
                .ok_or(CartCommandError::UnknownProduct(id)),
            Self::Remove(id) => Ok(CartAction::RemoveItem(id)),
            Self::Update(product, delta) => Ok(CartAction::UpdateQuantity { product, delta }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use storefront::products::Product;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_each_verb() -> TestResult {
        assert_eq!("add=tea".parse::<CartCommand>()?, CartCommand::Add("tea".into()));
        assert_eq!(
            "remove=tea".parse::<CartCommand>()?,
            CartCommand::Remove("tea".into())
        );
        assert_eq!(
            "update=tea:-2".parse::<CartCommand>()?,
            CartCommand::Update("tea".into(), -2)
        );

        Ok(())
    }

    #[test]
    fn update_splits_on_last_colon() -> TestResult {
        assert_eq!(
            "update=sku:42:3".parse::<CartCommand>()?,
            CartCommand::Update("sku:42".into(), 3)
        );

        Ok(())
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(matches!(
            "buy=tea".parse::<CartCommand>(),
            Err(CartCommandError::Syntax(_))
        ));
        assert!(matches!(
            "add".parse::<CartCommand>(),
            Err(CartCommandError::Syntax(_))
        ));
        assert!(matches!(
            "update=tea".parse::<CartCommand>(),
            Err(CartCommandError::Syntax(_))
        ));
        assert!(matches!(
            "update=tea:lots".parse::<CartCommand>(),
            Err(CartCommandError::Delta(_))
        ));
        assert!(matches!(
            "add= ".parse::<CartCommand>(),
            Err(CartCommandError::EmptyId(_))
        ));
    }

    #[test]
    fn add_resolves_against_catalog() -> TestResult {
        let mut catalog = Catalog::new(GBP);
        catalog.insert_product(Product::new("tea", "Tea", Money::from_minor(425, GBP)))?;

        let action = CartCommand::Add("tea".into()).into_action(&catalog)?;

        assert!(matches!(action, CartAction::AddItem(product) if product.name == "Tea"));

        let missing = CartCommand::Add("coffee".into()).into_action(&catalog);

        assert!(matches!(missing, Err(CartCommandError::UnknownProduct(id)) if id.as_str() == "coffee"));

        // Removing an unlisted product is still a valid (no-op) action.
        assert!(CartCommand::Remove("coffee".into()).into_action(&catalog).is_ok());

        Ok(())
    }
}
