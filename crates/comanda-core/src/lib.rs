//! Core domain layer for the Comanda ordering runtime.
//!
//! Holds the state store with change notification, the route/guard
//! navigation machine, the pure cart-derivation pipeline, the domain models,
//! and the collaborator traits (repositories and the durable key-value
//! store). No I/O implementations live here.

pub mod cart;
pub mod error;
pub mod kv;
pub mod menu;
pub mod order;
pub mod route;
pub mod session;
pub mod state;
pub mod user;

// Re-export common error type
pub use error::{ComandaError, Result};
