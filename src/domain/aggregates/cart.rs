//! Cart assembly for checkout

use serde::{Deserialize, Serialize};
use super::catalog::Catalog;
use crate::domain::value_objects::{Money, Quantity};

/// Cart used when checkout is opened without a "buy now" product.
pub const DEFAULT_CART: [(u32, u32); 2] = [(1, 2), (2, 1)];

/// A product id paired with a quantity, not yet resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub quantity: Quantity,
}

/// State handed over when a shopper jumps to checkout from a product page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutNavigation {
    pub product_id: Option<u32>,
    pub product_name: Option<String>,
    pub product_price: Option<f64>,
    /// Missing or zero means one.
    pub quantity: Option<u32>,
}

/// A cart line joined with display data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedLine {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub quantity: Quantity,
}

impl ResolvedLine {
    pub fn line_total(&self) -> Money { self.price * self.quantity }
}

/// Lines to price when no navigation state is present.
pub fn default_lines() -> Vec<CartLine> {
    DEFAULT_CART.iter()
        .filter_map(|&(id, qty)| Quantity::new(qty).ok().map(|quantity| CartLine { id, quantity }))
        .collect()
}

/// Resolves lines against the catalog in input order; unknown ids are dropped.
pub fn resolve(catalog: &Catalog, lines: &[CartLine]) -> Vec<ResolvedLine> {
    lines.iter()
        .filter_map(|line| {
            let product = catalog.find(line.id)?;
            Some(ResolvedLine {
                id: product.id, name: product.name.to_string(), price: product.price,
                image: product.image.to_string(), quantity: line.quantity,
            })
        })
        .collect()
}

/// Builds the checkout cart from navigation state, falling back to [`DEFAULT_CART`].
///
/// A complete "buy now" reference (id, name and price) keeps the supplied name
/// and price and takes its image from the catalog. A negative or non-finite
/// price falls back to the catalog line. Unknown ids yield no line.
pub fn assemble(catalog: &Catalog, nav: Option<&CheckoutNavigation>) -> Vec<ResolvedLine> {
    let Some(nav) = nav else { return resolve(catalog, &default_lines()) };
    let Some(id) = nav.product_id.filter(|&id| id != 0) else { return resolve(catalog, &default_lines()) };
    let quantity = nav.quantity.and_then(|q| Quantity::new(q).ok()).unwrap_or(Quantity::ONE);

    let Some(product) = catalog.find(id) else { return vec![] };
    match (nav.product_name.as_deref(), nav.product_price) {
        (Some(name), Some(price)) if !name.is_empty() && price.is_finite() && price > 0.0 => vec![ResolvedLine {
            id, name: name.to_string(), price: Money::new(price), image: product.image.to_string(), quantity,
        }],
        _ => resolve(catalog, &[CartLine { id, quantity }]),
    }
}

/// Re-prices lines from the catalog for an order that is actually placed.
/// Supplied names are kept; lines whose id is not in the catalog are dropped.
pub fn with_catalog_prices(catalog: &Catalog, lines: Vec<ResolvedLine>) -> Vec<ResolvedLine> {
    lines.into_iter()
        .filter_map(|line| {
            let product = catalog.find(line.id)?;
            Some(ResolvedLine { price: product.price, ..line })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity { Quantity::new(n).unwrap() }

    #[test]
    fn test_default_cart() {
        let lines = assemble(&Catalog::builtin(), None);
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].id, lines[0].quantity.value()), (1, 2));
        assert_eq!((lines[1].id, lines[1].quantity.value()), (2, 1));
        assert_eq!(lines[0].price, Money::new(89.99));
    }

    #[test]
    fn test_unknown_id_dropped() {
        let lines = resolve(&Catalog::builtin(), &[CartLine { id: 9999, quantity: qty(1) }]);
        assert!(lines.is_empty());
        let nav = CheckoutNavigation { product_id: Some(9999), ..Default::default() };
        assert!(assemble(&Catalog::builtin(), Some(&nav)).is_empty());
        let full = CheckoutNavigation {
            product_id: Some(9999), product_name: Some("Ghost".into()), product_price: Some(10.0), quantity: Some(1),
        };
        assert!(assemble(&Catalog::builtin(), Some(&full)).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let input = [CartLine { id: 5, quantity: qty(1) }, CartLine { id: 9999, quantity: qty(4) }, CartLine { id: 3, quantity: qty(2) }];
        let ids: Vec<u32> = resolve(&Catalog::builtin(), &input).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn test_buy_now_uses_supplied_name_and_price() {
        let nav = CheckoutNavigation {
            product_id: Some(4), product_name: Some("Face Mask".into()), product_price: Some(30.0), quantity: Some(3),
        };
        let lines = assemble(&Catalog::builtin(), Some(&nav));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Face Mask");
        assert_eq!(lines[0].price, Money::new(30.0));
        assert!(lines[0].image.contains("unsplash"));
        assert_eq!(lines[0].line_total(), Money::new(90.0));
    }

    #[test]
    fn test_buy_now_rejects_negative_or_non_finite_price() {
        for price in [-1000.0, f64::NAN, f64::INFINITY] {
            let nav = CheckoutNavigation {
                product_id: Some(104), product_name: Some("Perfume".into()), product_price: Some(price), quantity: Some(1),
            };
            let lines = assemble(&Catalog::builtin(), Some(&nav));
            assert_eq!(lines[0].price, Money::new(249.99));
            assert_eq!(lines[0].name, "Luxury Perfume Duo");
        }
    }

    #[test]
    fn test_catalog_prices_replace_supplied_ones() {
        let nav = CheckoutNavigation {
            product_id: Some(4), product_name: Some("Face Mask".into()), product_price: Some(0.01), quantity: Some(2),
        };
        let lines = with_catalog_prices(&Catalog::builtin(), assemble(&Catalog::builtin(), Some(&nav)));
        assert_eq!(lines[0].price, Money::new(34.99));
        assert_eq!(lines[0].name, "Face Mask");
        assert_eq!(lines[0].quantity.value(), 2);
    }

    #[test]
    fn test_buy_now_bare_id_resolves_with_default_quantity() {
        let nav = CheckoutNavigation { product_id: Some(6), ..Default::default() };
        let lines = assemble(&Catalog::builtin(), Some(&nav));
        assert_eq!(lines[0].name, "Vitamin C Brightening Cream");
        assert_eq!(lines[0].quantity, Quantity::ONE);
        let zero = CheckoutNavigation { product_id: Some(6), quantity: Some(0), ..Default::default() };
        assert_eq!(assemble(&Catalog::builtin(), Some(&zero))[0].quantity, Quantity::ONE);
    }

    #[test]
    fn test_navigation_without_id_uses_default_cart() {
        let nav = CheckoutNavigation { product_name: Some("Orphan".into()), ..Default::default() };
        assert_eq!(assemble(&Catalog::builtin(), Some(&nav)).len(), 2);
    }
}
