//! HTTP-backed user repository.

use crate::http_client::HttpClient;
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::user::{User, UserRepository};

/// [`UserRepository`] over the `/users` collection of the record store.
pub struct HttpUserRepository {
    client: HttpClient,
}

impl HttpUserRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        self.client.get("/users").await
    }

    async fn create(&self, user: User) -> Result<User> {
        self.client.post("/users", &user).await
    }
}
