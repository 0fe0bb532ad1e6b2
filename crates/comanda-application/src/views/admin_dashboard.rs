//! Admin dashboard: every order in the system, filterable by status, with
//! status advancement and deletion.

use crate::fmt;
use crate::templates::{self, LayoutParams, components, layout};
use crate::view::{Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::order::{Order, OrderRepository, OrderStatus};
use comanda_core::route::Route;
use comanda_core::state::{Store, UiPatch};
use std::sync::Arc;

pub struct AdminDashboardView {
    store: Store,
    orders: Arc<dyn OrderRepository>,
    surface: Arc<dyn Surface>,
}

impl AdminDashboardView {
    pub fn new(store: Store, orders: Arc<dyn OrderRepository>, surface: Arc<dyn Surface>) -> Self {
        Self {
            store,
            orders,
            surface,
        }
    }

    /// Status chip gesture. `"all"` or one of the lowercase flow values.
    pub async fn set_filter(&self, filter: &str) -> Result<()> {
        self.store.set_ui(UiPatch::admin_filter(filter));
        self.render().await
    }

    /// Detail panel markup for one order, from the last fetched snapshot.
    ///
    /// Returns `None` when the id is no longer present (deleted underneath
    /// an open panel).
    pub fn detail_markup(&self, order_id: &str) -> Option<String> {
        let state = self.store.state();
        let order = state.orders.iter().find(|o| o.id == order_id)?;
        let lines: String = order
            .items
            .iter()
            .map(|i| {
                format!(
                    r#"<div class="line"><span>{}x {}</span><span>{}</span></div>"#,
                    i.qty,
                    templates::escape_html(&i.name),
                    fmt::money(i.unit_price * f64::from(i.qty)),
                )
            })
            .collect();
        Some(format!(
            r#"<div class="detail">
  <h4>Order {id}</h4>
  {lines}
  <div class="grand"><span>Total</span><span>{total}</span></div>
  <button class="btn small" data-advance="{id}">Advance status</button>
  <button class="danger small" data-delete="{id}">Delete</button>
</div>"#,
            id = templates::escape_html(&order.id),
            total = fmt::money(order.total),
        ))
    }

    /// Moves an order one step along the status flow and re-renders.
    ///
    /// A terminal order is written back unchanged; the flow saturates
    /// rather than erroring.
    pub async fn advance_status(&self, order_id: &str) -> Result<()> {
        let current = self
            .store
            .state()
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .map(|o| o.status);
        let Some(current) = current else {
            self.surface.notify("Order no longer exists");
            return self.render().await;
        };
        match self.orders.update_status(order_id, current.next()).await {
            Ok(_) => {}
            Err(err) if err.is_not_found() => self.surface.notify("Order no longer exists"),
            Err(err) => {
                tracing::warn!(error = %err, order_id, "status update failed");
                self.surface.notify("Could not update the order");
            }
        }
        self.render().await
    }

    pub async fn delete_order(&self, order_id: &str) -> Result<()> {
        match self.orders.remove(order_id).await {
            Ok(_) => {}
            Err(err) if err.is_not_found() => self.surface.notify("Order no longer exists"),
            Err(err) => {
                tracing::warn!(error = %err, order_id, "order removal failed");
                self.surface.notify("Could not delete the order");
            }
        }
        self.render().await
    }
}

#[async_trait]
impl View for AdminDashboardView {
    async fn render(&self) -> Result<()> {
        // A fetch failure surfaces as a notice and the dashboard renders
        // from the last fetched snapshot instead.
        match self.orders.list_all().await {
            Ok(fetched) => self.store.set_orders(fetched),
            Err(err) => {
                tracing::warn!(error = %err, "order fetch failed");
                self.surface.notify("Could not load the orders");
            }
        }
        let state = self.store.state();

        let mut filters = vec!["all".to_string()];
        filters.extend(OrderStatus::FLOW.iter().map(|s| s.to_string()));
        let chips: String = filters
            .iter()
            .map(|f| {
                let active = if *f == state.ui.admin_filter { " active" } else { "" };
                format!(r#"<button class="chip{active}" data-filter="{f}">{f}</button>"#)
            })
            .collect();

        let visible: Vec<&Order> = state
            .orders
            .iter()
            .filter(|o| {
                state.ui.admin_filter.eq_ignore_ascii_case("all")
                    || o.status.to_string().eq_ignore_ascii_case(&state.ui.admin_filter)
            })
            .collect();

        let body = if visible.is_empty() {
            r#"<p class="empty">No orders in this state.</p>"#.to_string()
        } else {
            let rows: String = visible.iter().map(|o| components::order_row(o, true)).collect();
            format!(
                r#"<table class="orders">
  <thead><tr><th>Order</th><th>Date</th><th>Status</th><th>Total</th><th></th></tr></thead>
  <tbody>{rows}</tbody>
</table>"#
            )
        };

        self.surface.mount(&layout(LayoutParams {
            session: state.session.as_ref(),
            active_route: &Route::Admin,
            title: "Dashboard",
            subtitle: "All orders, live",
            content: &format!(
                r#"<div class="card"><div class="chips">{chips}</div>{body}</div>"#
            ),
        }));
        Ok(())
    }
}
