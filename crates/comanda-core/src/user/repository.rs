//! User repository trait.

use super::model::User;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing user records.
///
/// Used by the authentication service to validate credentials and to
/// register new accounts against the external record store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user record.
    async fn list(&self) -> Result<Vec<User>>;

    /// Creates a new user record.
    ///
    /// # Returns
    ///
    /// The created record as persisted by the store (id assigned).
    async fn create(&self, user: User) -> Result<User>;
}
