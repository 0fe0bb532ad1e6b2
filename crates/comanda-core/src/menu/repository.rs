//! Menu repository trait.
//!
//! Defines the interface for catalog retrieval.

use super::model::MenuItem;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for reading the product catalog.
///
/// This trait decouples the runtime from the specific record store (HTTP
/// backend, in-memory fixture, ...). The catalog is always re-fetched from
/// the collaborator, never trusted from a local cache across runs.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Lists the complete catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<MenuItem>)`: All catalog entries
    /// - `Err(_)`: Error occurred during retrieval
    async fn list(&self) -> Result<Vec<MenuItem>>;
}
