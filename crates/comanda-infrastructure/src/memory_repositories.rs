//! In-memory repository implementations.
//!
//! Fixture-backed counterparts of the HTTP repositories, used by tests and
//! by hosts running without a record store. Listing semantics mirror the
//! HTTP backend: order listings come back newest first.

use async_trait::async_trait;
use comanda_core::error::{ComandaError, Result};
use comanda_core::menu::{MenuItem, MenuRepository};
use comanda_core::order::{Order, OrderRepository, OrderStatus};
use comanda_core::user::{User, UserRepository};
use std::sync::RwLock;

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

/// [`MenuRepository`] over a fixed in-memory catalog.
#[derive(Default)]
pub struct InMemoryMenuRepository {
    items: RwLock<Vec<MenuItem>>,
}

impl InMemoryMenuRepository {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>> {
        Ok(read(&self.items).clone())
    }
}

/// [`OrderRepository`] over an in-memory collection.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    fn sorted_desc(mut orders: Vec<Order>) -> Vec<Order> {
        // RFC 3339 strings sort chronologically as text.
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>> {
        Ok(Self::sorted_desc(read(&self.orders).clone()))
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>> {
        let mine = read(&self.orders)
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(mine))
    }

    async fn create(&self, order: Order) -> Result<Order> {
        write(&self.orders).push(order.clone());
        Ok(order)
    }

    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        let mut orders = write(&self.orders);
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ComandaError::not_found("order", order_id))?;
        order.status = status;
        Ok(order.clone())
    }

    async fn remove(&self, order_id: &str) -> Result<bool> {
        let mut orders = write(&self.orders);
        let before = orders.len();
        orders.retain(|o| o.id != order_id);
        if orders.len() == before {
            return Err(ComandaError::not_found("order", order_id));
        }
        Ok(true)
    }
}

/// [`UserRepository`] over an in-memory collection.
///
/// Assigns ids on create the way the record store would.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(read(&self.users).clone())
    }

    async fn create(&self, mut user: User) -> Result<User> {
        let mut users = write(&self.users);
        if user.id == 0 {
            user.id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        }
        users.push(user.clone());
        Ok(user)
    }
}
