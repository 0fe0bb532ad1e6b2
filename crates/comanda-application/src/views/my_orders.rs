//! My Orders view: a user's own order history.

use crate::templates::{self, LayoutParams, components, layout};
use crate::view::{Navigator, Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::order::{Order, OrderRepository};
use comanda_core::route::Route;
use comanda_core::state::Store;
use std::sync::Arc;

pub struct MyOrdersView {
    store: Store,
    orders: Arc<dyn OrderRepository>,
    surface: Arc<dyn Surface>,
    navigator: Arc<dyn Navigator>,
}

impl MyOrdersView {
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

/// "2x Burger • 1x Fries" summary of an order's items.
fn items_summary(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|i| format!("{}x {}", i.qty, templates::escape_html(&i.name)))
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

#[async_trait]
impl View for MyOrdersView {
    async fn render(&self) -> Result<()> {
        // The router guard already keeps anonymous visitors out; this is a
        // last line of defense for a session cleared mid-render.
        let Some(session) = self.store.state().session else {
            self.navigator.set_fragment("#/login");
            return Ok(());
        };

        // Fetch the whole listing and filter locally, so a freshly placed
        // order shows up even when the record store indexes lazily. A fetch
        // failure surfaces as a notice and the view renders from the last
        // fetched snapshot instead.
        let mine: Vec<Order> = match self.orders.list_all().await {
            Ok(all) => {
                let mine: Vec<Order> = all
                    .into_iter()
                    .filter(|o| o.user_id == session.id)
                    .collect();
                self.store.set_orders(mine.clone());
                mine
            }
            Err(err) => {
                tracing::warn!(error = %err, "order fetch failed");
                self.surface.notify("Could not load your orders");
                self.store.state().orders
            }
        };

        let body = if mine.is_empty() {
            r##"<p class="empty">You have no orders yet. <a href="#/menu">Order something!</a></p>"##
                .to_string()
        } else {
            let rows: String = mine
                .iter()
                .filter(|o| !o.items.is_empty())
                .map(|o| {
                    format!(
                        "{}\n<tr class=\"detailRow\"><td colspan=\"5\" class=\"mini\">{}</td></tr>",
                        components::order_row(o, false),
                        items_summary(o),
                    )
                })
                .collect();
            format!(
                r#"<table class="orders">
  <thead><tr><th>Order</th><th>Date</th><th>Status</th><th>Total</th><th></th></tr></thead>
  <tbody>{rows}</tbody>
</table>"#
            )
        };

        self.surface.mount(&layout(LayoutParams {
            session: Some(&session),
            active_route: &Route::Orders,
            title: "My Orders",
            subtitle: "Track your past and pending orders",
            content: &format!(r#"<div class="card">{body}</div>"#),
        }));
        Ok(())
    }
}
