//! Menu view: catalog browsing plus the live cart sidebar.
//!
//! The heaviest view in the runtime. Rendering resolves the quantity-only
//! cart against the catalog on every pass, so prices always reflect the
//! current menu and a stale persisted cart degrades to placeholder lines
//! instead of breaking the page.

use crate::checkout::CheckoutUseCase;
use crate::fmt;
use crate::templates::{self, LayoutParams, components, layout};
use crate::view::{Surface, View};
use async_trait::async_trait;
use comanda_core::cart::{compute_totals, derive_lines, validate_cart};
use comanda_core::error::Result;
use comanda_core::menu::MenuRepository;
use comanda_core::route::Route;
use comanda_core::state::{Store, UiPatch};
use std::sync::Arc;

pub struct MenuView {
    store: Store,
    menu_repo: Arc<dyn MenuRepository>,
    checkout: Arc<CheckoutUseCase>,
    surface: Arc<dyn Surface>,
}

impl MenuView {
    pub fn new(
        store: Store,
        menu_repo: Arc<dyn MenuRepository>,
        checkout: Arc<CheckoutUseCase>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            store,
            menu_repo,
            checkout,
            surface,
        }
    }

    /// Category chip gesture.
    pub async fn select_category(&self, category: &str) -> Result<()> {
        self.store.set_ui(UiPatch::menu_category(category));
        self.render().await
    }

    /// Search box gesture. Matching is case-insensitive on the product name.
    pub async fn search(&self, term: &str) -> Result<()> {
        self.store.set_ui(UiPatch::menu_search(term));
        self.render().await
    }

    /// Add-to-cart gesture from a product card.
    pub async fn add_item(&self, product_id: i64) -> Result<()> {
        self.store.add_to_cart(product_id);
        self.render().await
    }

    pub async fn increment(&self, product_id: i64) -> Result<()> {
        self.store.change_qty(product_id, 1);
        self.render().await
    }

    pub async fn decrement(&self, product_id: i64) -> Result<()> {
        self.store.change_qty(product_id, -1);
        self.render().await
    }

    /// Remove gesture: a large negative delta drops the line through the
    /// same quantity-change path incrementing uses.
    pub async fn remove_item(&self, product_id: i64) -> Result<()> {
        self.store.change_qty(product_id, -999);
        self.render().await
    }

    pub async fn clear_cart(&self) -> Result<()> {
        self.store.clear_cart();
        self.render().await
    }

    /// Confirm gesture: hand the cart to checkout.
    ///
    /// An empty cart is rejected locally by the use case and silently
    /// ignored here; a persistence failure surfaces as a notice so the cart
    /// survives for a retry.
    pub async fn confirm_order(&self) -> Result<()> {
        match self.checkout.submit().await {
            Ok(_) => Ok(()),
            Err(err) if err.is_validation() => Ok(()),
            Err(err) if err.is_data_access() => {
                self.surface.notify("Could not place the order, please retry");
                tracing::warn!(error = %err, "order submission failed");
                self.render().await
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl View for MenuView {
    async fn render(&self) -> Result<()> {
        // Lazy catalog load: only the first render after a cold start pays
        // for the fetch. A failed fetch degrades to an empty catalog with a
        // notice instead of a blank screen.
        if self.store.state().menu.is_empty() {
            match self.menu_repo.list().await {
                Ok(items) => self.store.set_menu(items),
                Err(err) => {
                    tracing::warn!(error = %err, "menu fetch failed");
                    self.surface.notify("Could not load the menu");
                }
            }
        }

        // Drop a persisted cart that violates the quantity invariant rather
        // than render nonsense quantities.
        if !validate_cart(&self.store.state().cart) {
            tracing::warn!("discarding invalid persisted cart");
            self.store.clear_cart();
        }

        let state = self.store.state();

        let mut categories: Vec<&str> = vec!["All"];
        for item in &state.menu {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }

        let search = state.ui.menu_search.to_lowercase();
        let visible: Vec<_> = state
            .menu
            .iter()
            .filter(|p| state.ui.menu_category == "All" || p.category == state.ui.menu_category)
            .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
            .collect();

        let lines = derive_lines(&state.menu, &state.cart);
        let totals = compute_totals(&lines);

        let chips: String = categories
            .iter()
            .map(|c| {
                let active = if *c == state.ui.menu_category.as_str() { " active" } else { "" };
                format!(
                    r#"<button class="chip{active}" data-category="{}">{}</button>"#,
                    templates::escape_html(c),
                    templates::escape_html(c),
                )
            })
            .collect();

        let cards: String = visible.iter().map(|p| components::product_card(p)).collect();
        let cards = if cards.is_empty() {
            r#"<p class="empty">No products match.</p>"#.to_string()
        } else {
            cards
        };

        let cart_markup = if lines.is_empty() {
            r#"<p class="empty">Your cart is empty.</p>"#.to_string()
        } else {
            let items: String = lines.iter().map(components::cart_item).collect();
            format!(
                r#"{items}
<div class="totals">
  <div><span>Subtotal</span><span>{}</span></div>
  <div><span>Tax</span><span>{}</span></div>
  <div class="grand"><span>Total</span><span>{}</span></div>
</div>
<button class="btn" id="confirmOrderBtn">Confirm Order</button>
<button class="btnGhost" id="clearCartBtn">Clear</button>"#,
                fmt::money(totals.subtotal),
                fmt::money(totals.tax),
                fmt::money(totals.total),
            )
        };

        let content = format!(
            r#"<div class="menuLayout">
  <section class="catalog">
    <input id="menuSearch" placeholder="Search..." value="{}" />
    <div class="chips">{chips}</div>
    <div class="grid">{cards}</div>
  </section>
  <aside class="cart card">
    <h3>Cart</h3>
    {cart_markup}
  </aside>
</div>"#,
            templates::escape_html(&state.ui.menu_search),
        );

        self.surface.mount(&layout(LayoutParams {
            session: state.session.as_ref(),
            active_route: &Route::Menu,
            title: "Menu",
            subtitle: "Pick your dishes",
            content: &content,
        }));
        Ok(())
    }
}
