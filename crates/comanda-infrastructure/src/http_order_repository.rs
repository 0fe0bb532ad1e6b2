//! HTTP-backed order repository.
//!
//! Speaks the json-server dialect: `_sort=-createdAt` for newest-first
//! listings, `userId` as a query filter, PATCH for the status-only update.
//! Order ids travel as strings in the path for `/orders/:id` compatibility.

use crate::http_client::HttpClient;
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::order::{Order, OrderRepository, OrderStatus};
use serde::Serialize;

/// [`OrderRepository`] over the `/orders` collection of the record store.
pub struct HttpOrderRepository {
    client: HttpClient,
}

impl HttpOrderRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct StatusPatch {
    status: OrderStatus,
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>> {
        self.client.get("/orders?_sort=-createdAt").await
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>> {
        self.client
            .get(&format!("/orders?userId={user_id}&_sort=-createdAt"))
            .await
    }

    async fn create(&self, order: Order) -> Result<Order> {
        self.client.post("/orders", &order).await
    }

    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        self.client
            .patch(&format!("/orders/{order_id}"), &StatusPatch { status })
            .await
    }

    async fn remove(&self, order_id: &str) -> Result<bool> {
        self.client.delete(&format!("/orders/{order_id}")).await
    }
}
