//! Application layer for the Comanda runtime.
//!
//! Assembles the core state machine and the infrastructure collaborators
//! into a running single-page application: views that render from store
//! snapshots, use cases (auth, checkout) that mediate between gestures and
//! repositories, and the router that turns fragment changes into view
//! invocations.
//!
//! The host embeds [`AppRuntime`] and forwards two signals to it: the
//! initial load and every fragment change. Everything else happens inside.

pub mod auth;
pub mod checkout;
pub mod fmt;
pub mod router;
pub mod runtime;
pub mod templates;
pub mod testing;
pub mod view;
pub mod views;

pub use auth::AuthService;
pub use checkout::CheckoutUseCase;
pub use router::Router;
pub use runtime::{AppRuntime, RuntimeDeps};
pub use view::{Navigator, Surface, View};
