//! Application state: the snapshot model and the store that owns it.

pub mod model;
pub mod store;

pub use model::{AppState, UiPatch, UiState};
pub use store::{Store, SubscriberId};
