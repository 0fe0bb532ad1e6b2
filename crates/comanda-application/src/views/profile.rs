//! Profile view: the signed-in user's account card.

use crate::templates::{self, LayoutParams, layout};
use crate::view::{Navigator, Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::order::OrderRepository;
use comanda_core::route::Route;
use comanda_core::state::Store;
use std::sync::Arc;

pub struct ProfileView {
    store: Store,
    orders: Arc<dyn OrderRepository>,
    surface: Arc<dyn Surface>,
    navigator: Arc<dyn Navigator>,
}

impl ProfileView {
    pub fn new(
        store: Store,
        orders: Arc<dyn OrderRepository>,
        surface: Arc<dyn Surface>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            orders,
            surface,
            navigator,
        }
    }
}

#[async_trait]
impl View for ProfileView {
    async fn render(&self) -> Result<()> {
        let Some(session) = self.store.state().session else {
            self.navigator.set_fragment("#/login");
            return Ok(());
        };

        // The count is display-only; a fetch failure degrades to a dash
        // instead of blocking the page.
        let order_count = match self.orders.list_by_user(session.id).await {
            Ok(orders) => orders.len().to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "order count fetch failed");
                "-".to_string()
            }
        };

        let content = format!(
            r#"<div class="card profileCard">
  <div class="avatar">{initial}</div>
  <h3>{name}</h3>
  <p class="mini">{email}</p>
  <div class="facts">
    <div><span>Role</span><span>{role}</span></div>
    <div><span>Orders placed</span><span>{order_count}</span></div>
  </div>
</div>"#,
            initial = templates::escape_html(
                &session.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
            ),
            name = templates::escape_html(&session.name),
            email = templates::escape_html(&session.email),
            role = session.role,
        );

        self.surface.mount(&layout(LayoutParams {
            session: Some(&session),
            active_route: &Route::Profile,
            title: "Profile",
            subtitle: "Your account",
            content: &content,
        }));
        Ok(())
    }
}
