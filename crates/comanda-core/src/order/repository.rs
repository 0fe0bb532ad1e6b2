//! Order repository trait.
//!
//! Defines the interface for order persistence operations.

use super::model::{Order, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing order persistence.
///
/// This trait defines the contract for persisting and retrieving orders,
/// decoupling the runtime's core logic from the specific record store
/// (e.g. an HTTP JSON backend, or an in-memory fixture for tests).
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Ordering listings by creation date, newest first
/// - Concurrent writers (an admin may update any order at any time)
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists every order in the system, newest first.
    ///
    /// Used primarily by the admin dashboard.
    async fn list_all(&self) -> Result<Vec<Order>>;

    /// Lists the orders of a specific user, newest first.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user to filter by
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>>;

    /// Creates a new order.
    ///
    /// The order must arrive complete (id, items, total, status, timestamp);
    /// the repository performs no assembly of its own.
    ///
    /// # Returns
    ///
    /// The created record as persisted by the store.
    async fn create(&self, order: Order) -> Result<Order>;

    /// Updates only the status of an existing order (partial update).
    ///
    /// # Arguments
    ///
    /// * `order_id` - The order to update
    /// * `status` - The new status value
    ///
    /// # Returns
    ///
    /// The updated record.
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order>;

    /// Removes an order by id.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The order was removed
    /// - `Err(_)`: Error occurred during removal
    async fn remove(&self, order_id: &str) -> Result<bool>;
}
