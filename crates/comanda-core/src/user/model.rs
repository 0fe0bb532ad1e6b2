//! User domain model.

use crate::session::{Role, Session};
use serde::{Deserialize, Serialize};

/// A user record held by the external record store.
///
/// Credential checking is a simple field match against this record; password
/// storage policy is the collaborator's concern, not the runtime's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Builds the session this user gets after a successful login.
    ///
    /// The password never crosses into the session.
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
