//! Views: render-from-snapshot plus the gesture methods the host binds.
//!
//! Every view rebuilds its full markup from the current store snapshot and
//! mounts it wholesale; there is no incremental update. Gestures (what were
//! event handlers in a browser host) are public async methods that mutate
//! the store or call a collaborator and then re-render.

pub mod admin_dashboard;
pub mod login;
pub mod menu;
pub mod my_orders;
pub mod not_found;
pub mod profile;
pub mod register;

pub use admin_dashboard::AdminDashboardView;
pub use login::LoginView;
pub use menu::MenuView;
pub use my_orders::MyOrdersView;
pub use not_found::NotFoundView;
pub use profile::ProfileView;
pub use register::RegisterView;
