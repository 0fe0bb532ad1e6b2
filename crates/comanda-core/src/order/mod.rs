//! Order domain.

pub mod model;
pub mod repository;

pub use model::{Order, OrderItem, OrderStatus};
pub use repository::OrderRepository;
