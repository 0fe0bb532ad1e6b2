//! Menu item domain model.

use serde::{Deserialize, Serialize};

/// A single product in the catalog.
///
/// Menu items are owned by the external record store; the runtime only ever
/// reads them, caches them wholesale in [`AppState`](crate::state::AppState),
/// and resolves cart lines against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier, referenced by cart lines and order items.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category used for the menu filter chips.
    pub category: String,
    /// Unit price.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_json() {
        let item = MenuItem {
            id: 7,
            name: "Tacos".to_string(),
            category: "Mains".to_string(),
            price: 8.5,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
