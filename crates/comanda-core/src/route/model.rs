//! Route identifiers.
//!
//! Routes are the states of the navigation machine, one per registered hash
//! fragment, plus a wildcard state for anything unregistered.

use std::fmt;

/// A navigation destination, parsed from a hash fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `#/login`: the only route reachable without a session.
    Login,
    /// `#/register`: account creation, also reachable logged out.
    Register,
    /// `#/menu`: catalog + cart (user home).
    Menu,
    /// `#/orders`: the user's own orders.
    Orders,
    /// `#/admin`: admin dashboard (admin home).
    Admin,
    /// `#/profile`: account info.
    Profile,
    /// Wildcard state: an unregistered fragment, kept verbatim.
    NotFound(String),
}

impl Route {
    /// Parses a hash fragment into a route.
    ///
    /// An empty fragment means "initial load with no hash" and defaults to
    /// the login route; anything unregistered becomes [`Route::NotFound`].
    pub fn parse(fragment: &str) -> Route {
        match fragment {
            "" | "#/" | "#/login" => Route::Login,
            "#/register" => Route::Register,
            "#/menu" => Route::Menu,
            "#/orders" => Route::Orders,
            "#/admin" => Route::Admin,
            "#/profile" => Route::Profile,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// The hash fragment for this route.
    pub fn fragment(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Menu => "#/menu".to_string(),
            Route::Orders => "#/orders".to_string(),
            Route::Admin => "#/admin".to_string(),
            Route::Profile => "#/profile".to_string(),
            Route::NotFound(fragment) => fragment.clone(),
        }
    }

    /// True for the routes reachable without a session.
    pub fn is_auth_route(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// True for routes restricted to administrators.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Route::Admin)
    }

    /// True for the routes administrators are steered away from.
    pub fn is_user_only(&self) -> bool {
        matches!(self, Route::Menu | Route::Orders | Route::Profile)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fragment())
    }
}
