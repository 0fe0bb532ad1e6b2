//! Cart model and derivation pipeline.
//!
//! The cart stored in [`AppState`](crate::state::AppState) is quantity-only:
//! `[{ product_id, qty }]`. Everything priced is *derived state*, recomputed
//! from scratch against the catalog on every render and never persisted.
//! Keeping the derivation a pure function keeps the state machine the only
//! stateful artifact in the runtime.

use crate::menu::MenuItem;
use serde::{Deserialize, Serialize};

/// Tax rate applied to the cart subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Name substituted for cart lines referencing a product the catalog no
/// longer contains (e.g. a stale persisted cart after a menu change).
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

/// A quantity-only reference to a catalog entry.
///
/// Invariants, maintained by the store actions:
/// - at most one line per `product_id`
/// - `qty >= 1` for every line that survives an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub qty: u32,
}

/// A cart line resolved against the catalog: priced and named.
///
/// Never stored; rebuilt per render by [`derive_lines`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedCartLine {
    pub product_id: i64,
    pub qty: u32,
    pub name: String,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Aggregate totals over a set of derived lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Resolves each cart line against the catalog into a priced line.
///
/// A missing catalog entry resolves to a zero-priced placeholder rather than
/// failing, so a view always renders instead of crashing on a stale cart
/// that references a deleted product.
pub fn derive_lines(menu: &[MenuItem], cart: &[CartLine]) -> Vec<DerivedCartLine> {
    cart.iter()
        .map(|line| {
            let product = menu.iter().find(|p| p.id == line.product_id);
            let unit_price = product.map(|p| p.price).unwrap_or(0.0);
            DerivedCartLine {
                product_id: line.product_id,
                qty: line.qty,
                name: product
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
                unit_price,
                line_total: unit_price * f64::from(line.qty),
            }
        })
        .collect()
}

/// Computes subtotal, tax and grand total over derived lines.
pub fn compute_totals(lines: &[DerivedCartLine]) -> Totals {
    let subtotal: f64 = lines.iter().map(|l| l.line_total).sum();
    let tax = subtotal * TAX_RATE;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Returns true iff every cart line has `qty >= 1`.
///
/// A `false` observation means the cart is corrupt; the caller must clear it
/// rather than attempt a partial repair.
pub fn validate_cart(cart: &[CartLine]) -> bool {
    cart.iter().all(|line| line.qty >= 1)
}
