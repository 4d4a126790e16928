//! Cart scenarios driven by the bundled demo fixtures.

use std::path::Path;

use rusty_money::{Money, iso::GBP};
use storefront::prelude::*;
use testresult::TestResult;

fn demo_catalog() -> Result<Catalog<'static>, FixtureError> {
    let mut fixture = Fixture::with_base_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));

    fixture.load_products("demo")?.load_orders("demo")?;

    fixture.catalog()
}

fn product(catalog: &Catalog<'static>, id: &str) -> Result<Product<'static>, FixtureError> {
    catalog
        .product(&ProductId::from(id))
        .cloned()
        .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
}

#[test]
fn demo_set_loads_in_listing_order() -> TestResult {
    let catalog = demo_catalog()?;

    assert_eq!(catalog.currency(), GBP);
    assert_eq!(
        catalog.products().first().map(|p| p.id.as_str()),
        Some("chair")
    );
    assert_eq!(catalog.page(PageRequest::default()).len(), DEFAULT_PAGE_LIMIT);
    assert_eq!(
        catalog.page(PageRequest::default().next()).len(),
        catalog.products().len() - DEFAULT_PAGE_LIMIT
    );
    assert!(
        catalog
            .orders()
            .iter()
            .any(|order| order.status == OrderStatus::Shipped)
    );

    Ok(())
}

#[test]
fn shopping_session_against_demo_catalog() -> TestResult {
    let catalog = demo_catalog()?;
    let mut store = CartStore::new(catalog.currency());

    store.dispatch(CartAction::AddItem(product(&catalog, "chair")?))?;
    store.dispatch(CartAction::AddItem(product(&catalog, "lamp")?))?;
    store.dispatch(CartAction::AddItem(product(&catalog, "chair")?))?;

    assert_eq!(store.total()?, Money::from_minor(2500, GBP));

    store.dispatch(CartAction::UpdateQuantity {
        product: "lamp".into(),
        delta: 2,
    })?;
    store.dispatch(CartAction::RemoveItem("chair".into()))?;

    let lines: Vec<(&str, u32)> = store
        .state()
        .iter()
        .map(|line| (line.id().as_str(), line.quantity().get()))
        .collect();

    assert_eq!(lines, [("lamp", 3)]);
    assert_eq!(store.total()?, Money::from_minor(1500, GBP));

    let mut out = Vec::new();
    write_cart(&mut out, store.state())?;

    assert!(String::from_utf8(out)?.contains("Desk Lamp"));

    Ok(())
}

#[test]
fn shared_store_sees_every_demo_product() -> TestResult {
    let catalog = demo_catalog()?;
    let store = SharedCartStore::new(catalog.currency());

    for product in catalog.products() {
        store.add_item(product.clone())?;
    }

    assert_eq!(store.items().len(), catalog.products().len());
    assert_eq!(
        store.item_count(),
        u64::try_from(catalog.products().len())?
    );

    Ok(())
}
