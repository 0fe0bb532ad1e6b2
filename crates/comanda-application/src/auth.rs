//! Authentication service.
//!
//! Login and registration against the user record store. Credentials are a
//! plain field match on the user list; the record store owns password
//! policy. Registration enforces one business rule synchronously: an email
//! may exist only once, and self-registered accounts are always ordinary
//! users.

use comanda_core::error::{ComandaError, Result};
use comanda_core::session::Role;
use comanda_core::user::{User, UserRepository};
use std::sync::Arc;

/// Service validating credentials and registering accounts.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Attempts a login.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: credentials matched a record
    /// - `Ok(None)`: no record matched (invalid credentials)
    /// - `Err(_)`: the user list could not be retrieved
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let users = self.users.list().await?;
        let matched = users
            .into_iter()
            .find(|u| u.email == email && u.password == password);
        if let Some(user) = &matched {
            tracing::info!(user_id = user.id, "login succeeded");
        }
        Ok(matched)
    }

    /// Registers a new account.
    ///
    /// A duplicate email is rejected with a [`ComandaError::Validation`]
    /// before any record is written. The role is always forced to
    /// [`Role::User`]; there is no self-service path to admin.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let users = self.users.list().await?;
        if users.iter().any(|u| u.email == email) {
            return Err(ComandaError::validation("Email already exists"));
        }
        self.users
            .create(User {
                id: 0, // assigned by the record store
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role: Role::User,
            })
            .await
    }
}
