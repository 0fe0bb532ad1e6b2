//! HTTP-backed menu repository.

use crate::http_client::HttpClient;
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::menu::{MenuItem, MenuRepository};

/// [`MenuRepository`] over the `/menu` collection of the record store.
pub struct HttpMenuRepository {
    client: HttpClient,
}

impl HttpMenuRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuRepository for HttpMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>> {
        self.client.get("/menu").await
    }
}
