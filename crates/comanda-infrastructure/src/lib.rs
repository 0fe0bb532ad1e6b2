//! Infrastructure layer for the Comanda runtime.
//!
//! Concrete implementations of the core collaborator traits: the file-backed
//! durable key-value store, HTTP repositories over the JSON record store,
//! in-memory counterparts for tests and offline hosts, and path/config
//! management.

pub mod config;
pub mod http_client;
pub mod http_menu_repository;
pub mod http_order_repository;
pub mod http_user_repository;
pub mod json_file_kv;
pub mod memory_kv;
pub mod memory_repositories;
pub mod paths;

pub use config::AppConfig;
pub use http_client::HttpClient;
pub use http_menu_repository::HttpMenuRepository;
pub use http_order_repository::HttpOrderRepository;
pub use http_user_repository::HttpUserRepository;
pub use json_file_kv::JsonFileKeyValueStore;
pub use memory_kv::MemoryKeyValueStore;
pub use memory_repositories::{
    InMemoryMenuRepository, InMemoryOrderRepository, InMemoryUserRepository,
};
pub use paths::ComandaPaths;
