//! Checkout use case: turn the current cart into a persisted order.

use crate::view::Navigator;
use comanda_core::cart::{compute_totals, derive_lines};
use comanda_core::error::{ComandaError, Result};
use comanda_core::order::{Order, OrderItem, OrderStatus};
use comanda_core::route::Route;
use comanda_core::state::Store;
use std::sync::Arc;
use uuid::Uuid;

/// Assembles and submits orders from the live cart.
pub struct CheckoutUseCase {
    store: Store,
    orders: Arc<dyn comanda_core::order::OrderRepository>,
    navigator: Arc<dyn Navigator>,
}

impl CheckoutUseCase {
    pub fn new(
        store: Store,
        orders: Arc<dyn comanda_core::order::OrderRepository>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            orders,
            navigator,
        }
    }

    /// Submits the current cart as a new order.
    ///
    /// Rejected locally, with no network call, when no line has a positive
    /// quantity or no session exists. On success the cart is cleared and
    /// navigation moves to the orders route.
    ///
    /// The order is assembled from a fresh read of the store: uuid id, items
    /// frozen from the derived lines, total rounded to two decimals, the
    /// first flow status, and a creation timestamp.
    pub async fn submit(&self) -> Result<Order> {
        let state = self.store.state();
        let session = state
            .session
            .as_ref()
            .ok_or_else(|| ComandaError::auth("no active session"))?;
        if !state.cart.iter().any(|line| line.qty > 0) {
            return Err(ComandaError::validation("cart has no items"));
        }

        let lines = derive_lines(&state.menu, &state.cart);
        let totals = compute_totals(&lines);
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: session.id,
            items: lines
                .into_iter()
                .map(|l| OrderItem {
                    product_id: l.product_id,
                    qty: l.qty,
                    unit_price: l.unit_price,
                    name: l.name,
                })
                .collect(),
            total: (totals.total * 100.0).round() / 100.0,
            status: OrderStatus::initial(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let created = self.orders.create(order).await?;
        tracing::info!(order_id = %created.id, total = created.total, "order submitted");
        self.store.clear_cart();
        self.navigator.set_fragment(&Route::Orders.fragment());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryNavigator;
    use comanda_core::cart::CartLine;
    use comanda_core::menu::MenuItem;
    use comanda_core::order::OrderRepository;
    use comanda_core::session::{Role, Session};
    use comanda_infrastructure::{InMemoryOrderRepository, MemoryKeyValueStore};

    fn setup() -> (Store, Arc<InMemoryOrderRepository>, Arc<MemoryNavigator>, CheckoutUseCase) {
        let store = Store::new(Arc::new(MemoryKeyValueStore::new()));
        let orders = Arc::new(InMemoryOrderRepository::default());
        let navigator = Arc::new(MemoryNavigator::new("#/menu"));
        let checkout = CheckoutUseCase::new(store.clone(), orders.clone(), navigator.clone());
        (store, orders, navigator, checkout)
    }

    fn login(store: &Store) {
        store.set_session(Some(Session {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
        }));
    }

    fn stock(store: &Store) {
        store.set_menu(vec![
            MenuItem {
                id: 1,
                name: "Burger".to_string(),
                category: "Mains".to_string(),
                price: 10.0,
            },
            MenuItem {
                id: 2,
                name: "Fries".to_string(),
                category: "Sides".to_string(),
                price: 5.5,
            },
        ]);
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected_locally() {
        let (store, orders, _, checkout) = setup();
        login(&store);
        let err = checkout.submit().await.unwrap_err();
        assert!(err.is_validation());
        assert!(orders.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_assembles_order_and_clears_cart() {
        let (store, orders, navigator, checkout) = setup();
        login(&store);
        stock(&store);
        store.add_to_cart(1);
        store.add_to_cart(1);
        store.add_to_cart(2);

        let created = checkout.submit().await.unwrap();
        assert_eq!(created.user_id, 7);
        assert_eq!(created.status, OrderStatus::Pending);
        assert_eq!(created.items.len(), 2);
        assert_eq!(created.total, 27.54);
        assert!(!created.id.is_empty());

        assert!(store.state().cart.is_empty());
        assert_eq!(navigator.fragment_value(), "#/orders");
        assert_eq!(orders.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_line_is_priced_zero_not_fatal() {
        let (store, _, _, checkout) = setup();
        login(&store);
        stock(&store);
        store.add_to_cart(999);
        let created = checkout.submit().await.unwrap();
        assert_eq!(created.items[0].name, "Unknown");
        assert_eq!(created.total, 0.0);
        assert_eq!(store.state().cart, Vec::<CartLine>::new());
    }
}
