//! Hash-fragment routes and the access-control guard.

pub mod guard;
pub mod model;

pub use guard::guard;
pub use model::Route;
