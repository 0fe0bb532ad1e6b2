//! Menu (catalog) domain.

pub mod model;
pub mod repository;

pub use model::MenuItem;
pub use repository::MenuRepository;
