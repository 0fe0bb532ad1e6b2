//! Session domain model.
//!
//! The session is the authoritative identity and authorization token for the
//! whole runtime. It is created by a successful login, destroyed by logout,
//! and persisted verbatim to the durable key-value store on every change.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The role attached to an authenticated session.
///
/// Routing access control (the guard) is decided entirely from this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// An ordinary customer: browses the menu, orders, tracks orders.
    #[default]
    User,
    /// An administrator: manages every order in the system.
    Admin,
}

/// The authenticated identity carried through the running application.
///
/// A `Session` is a snapshot of the user record that logged in. It is stored
/// inside [`AppState`](crate::state::AppState) and mirrored to durable storage
/// under a fixed key so it survives process restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier of the backing user record.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Authorization role.
    pub role: Role,
}

impl Session {
    /// Returns true when this session carries administrator privileges.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
