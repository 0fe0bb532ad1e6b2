//! Page layout template.
//!
//! Generates the shared shell (topbar + content container) for every view:
//! role-dependent navigation, the active link highlighted, and a logout
//! button when a session exists. The template binds no events; gestures are
//! the views' concern.

use crate::templates::escape_html;
use comanda_core::route::Route;
use comanda_core::session::{Role, Session};

/// Inputs to [`layout`].
pub struct LayoutParams<'a> {
    pub session: Option<&'a Session>,
    pub active_route: &'a Route,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub content: &'a str,
}

fn nav_link(route: &Route, label: &str, active: &Route) -> String {
    let fragment = route.fragment();
    let class = if route == active { "active" } else { "" };
    format!(r##"<a href="{fragment}" data-nav="{fragment}" class="{class}">{label}</a>"##)
}

fn nav_for(session: &Session, active: &Route) -> String {
    match session.role {
        Role::Admin => nav_link(&Route::Admin, "Dashboard", active),
        Role::User => [
            nav_link(&Route::Menu, "Menu", active),
            nav_link(&Route::Orders, "My Orders", active),
            nav_link(&Route::Profile, "Profile", active),
        ]
        .join("\n"),
    }
}

/// Builds the full page shell around `content`.
pub fn layout(params: LayoutParams<'_>) -> String {
    let nav = params
        .session
        .map(|s| nav_for(s, params.active_route))
        .unwrap_or_default();
    let logout = if params.session.is_some() {
        r#"<button class="btn small secondary" id="logoutBtn">Log Out</button>"#
    } else {
        ""
    };
    let brand_target = match params.session {
        Some(s) if s.role == Role::Admin => Route::Admin.fragment(),
        Some(_) => Route::Menu.fragment(),
        None => Route::Login.fragment(),
    };
    let title = if params.title.is_empty() {
        String::new()
    } else {
        format!("<h1 class=\"h1\">{}</h1>", escape_html(params.title))
    };
    let subtitle = if params.subtitle.is_empty() {
        String::new()
    } else {
        format!("<p class=\"sub\">{}</p>", escape_html(params.subtitle))
    };

    format!(
        r##"<div class="topbar">
  <div class="container inner">
    <a class="brand" href="{brand_target}">
      <span class="logo"></span>
      <span>Comanda</span>
    </a>
    <nav class="nav">{nav}</nav>
    <div class="nav">{logout}</div>
  </div>
</div>
<div class="page">
  <div class="container">
    {title}
    {subtitle}
    <div class="sep"></div>
    {content}
  </div>
</div>"##,
        content = params.content,
    )
}
