//! Order domain model.
//!
//! Orders are externally persisted records; the runtime creates them at
//! checkout and the admin dashboard moves them along a fixed status flow.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The fixed ordered vocabulary an order progresses through.
///
/// The flow is enforced by validation, not by the storage layer: a record
/// store may hold anything, but the runtime only ever writes these values
/// and [`OrderStatus::next`] only ever moves one step forward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    /// Just submitted, not picked up by the kitchen yet.
    Pending,
    /// Being prepared.
    Preparing,
    /// Ready for pickup/delivery.
    Ready,
    /// Handed to the customer. Terminal.
    Delivered,
}

impl OrderStatus {
    /// The complete flow, in order.
    pub const FLOW: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// The first value of the flow, assigned to newly created orders.
    pub fn initial() -> Self {
        Self::FLOW[0]
    }

    /// Returns the next status in the flow, saturating at the last one.
    pub fn next(self) -> Self {
        let i = Self::FLOW.iter().position(|s| *s == self).unwrap_or(0);
        Self::FLOW[(i + 1).min(Self::FLOW.len() - 1)]
    }
}

/// A priced line inside a persisted order.
///
/// Carries enough denormalized product information (name, unit price) to
/// render the order later without re-resolving against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub qty: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub name: String,
}

/// An externally persisted order record.
///
/// The runtime never assumes it is the sole writer: a concurrent admin
/// session may update the status of any order at any time, so views always
/// re-fetch rather than trust the cached collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// UUID string, generated at checkout.
    pub id: String,
    /// Id of the user that placed the order.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Priced line items frozen at checkout time.
    pub items: Vec<OrderItem>,
    /// Grand total (subtotal + tax), rounded to two decimals.
    pub total: f64,
    /// Position in the status flow.
    pub status: OrderStatus,
    /// RFC 3339 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_order() {
        assert_eq!(OrderStatus::initial(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Pending.next(), OrderStatus::Preparing);
        assert_eq!(OrderStatus::Preparing.next(), OrderStatus::Ready);
        assert_eq!(OrderStatus::Ready.next(), OrderStatus::Delivered);
    }

    #[test]
    fn test_next_saturates_at_delivered() {
        assert_eq!(OrderStatus::Delivered.next(), OrderStatus::Delivered);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        let back: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(back, OrderStatus::Ready);
    }

    #[test]
    fn test_unknown_status_fails_at_the_edge() {
        let result = serde_json::from_str::<OrderStatus>("\"canceled\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_order_wire_field_names() {
        let order = Order {
            id: "o-1".to_string(),
            user_id: 9,
            items: vec![],
            total: 0.0,
            status: OrderStatus::Pending,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
