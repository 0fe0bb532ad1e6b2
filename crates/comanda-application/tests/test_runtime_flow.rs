//! End-to-end flows over the assembled runtime with in-memory collaborators.

use comanda_application::runtime::{AppRuntime, RuntimeDeps};
use comanda_application::testing::{MemoryNavigator, RecordingSurface};
use comanda_application::view::Navigator;
use comanda_core::cart::CartLine;
use comanda_core::kv::KeyValueStore;
use comanda_core::menu::MenuItem;
use comanda_core::order::OrderStatus;
use comanda_core::session::Role;
use comanda_core::user::User;
use comanda_infrastructure::{
    InMemoryMenuRepository, InMemoryOrderRepository, InMemoryUserRepository, MemoryKeyValueStore,
};
use std::sync::Arc;

fn sample_menu() -> Vec<MenuItem> {
    vec![
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
            price: 5.50,
        },
    ]
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Root".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin".to_string(),
            role: Role::Admin,
        },
        User {
            id: 2,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            role: Role::User,
        },
    ]
}

struct Harness {
    runtime: AppRuntime,
    navigator: Arc<MemoryNavigator>,
    surface: Arc<RecordingSurface>,
    kv: Arc<MemoryKeyValueStore>,
}

fn harness(initial_fragment: &str) -> Harness {
    harness_with_kv(initial_fragment, Arc::new(MemoryKeyValueStore::new()))
}

fn harness_with_kv(initial_fragment: &str, kv: Arc<MemoryKeyValueStore>) -> Harness {
    let navigator = Arc::new(MemoryNavigator::new(initial_fragment));
    let surface = Arc::new(RecordingSurface::new());
    let runtime = AppRuntime::new(RuntimeDeps {
        kv: kv.clone(),
        menu: Arc::new(InMemoryMenuRepository::new(sample_menu())),
        orders: Arc::new(InMemoryOrderRepository::new(vec![])),
        users: Arc::new(InMemoryUserRepository::new(sample_users())),
        navigator: navigator.clone(),
        surface: surface.clone(),
    });
    Harness {
        runtime,
        navigator,
        surface,
        kv,
    }
}

/// Drives dispatch cycles until the fragment stops moving, like a host
/// feeding fragment-change events back into the runtime.
async fn settle(h: &Harness) {
    loop {
        let before = h.navigator.fragment_value();
        h.runtime.fragment_changed().await.expect("dispatch failed");
        if h.navigator.fragment_value() == before {
            break;
        }
    }
}

#[tokio::test]
async fn test_unauthenticated_visitor_lands_on_login() {
    let h = harness("#/menu");
    h.runtime.start().await.expect("start failed");
    settle(&h).await;
    assert_eq!(h.navigator.fragment_value(), "#/login");
    assert!(h.surface.last_mount().unwrap().contains("loginForm"));
}

#[tokio::test]
async fn test_login_redirects_user_to_menu() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");

    h.runtime
        .login_view()
        .submit("ada@example.com", "pw")
        .await
        .expect("login failed");
    settle(&h).await;

    assert_eq!(h.navigator.fragment_value(), "#/menu");
    assert!(h.surface.last_mount().unwrap().contains("Burger"));
}

#[tokio::test]
async fn test_login_redirects_admin_to_dashboard() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");

    h.runtime
        .login_view()
        .submit("admin@example.com", "admin")
        .await
        .expect("login failed");
    settle(&h).await;

    assert_eq!(h.navigator.fragment_value(), "#/admin");
}

#[tokio::test]
async fn test_admin_cannot_reach_user_routes() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");
    h.runtime
        .login_view()
        .submit("admin@example.com", "admin")
        .await
        .expect("login failed");
    settle(&h).await;

    h.navigator.set_fragment("#/menu");
    settle(&h).await;
    assert_eq!(h.navigator.fragment_value(), "#/admin");
}

#[tokio::test]
async fn test_checkout_flow_places_order_and_lands_on_orders() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");
    h.runtime
        .login_view()
        .submit("ada@example.com", "pw")
        .await
        .expect("login failed");
    settle(&h).await;

    let menu = h.runtime.menu_view();
    menu.add_item(1).await.expect("add failed");
    menu.add_item(1).await.expect("add failed");
    menu.add_item(2).await.expect("add failed");
    menu.confirm_order().await.expect("confirm failed");
    settle(&h).await;

    assert_eq!(h.navigator.fragment_value(), "#/orders");
    assert!(h.runtime.store().state().cart.is_empty());
    let orders = h.runtime.store().state().orders;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Pending);
    // 2x10.00 + 1x5.50 = 25.50 subtotal, 27.54 with tax
    assert!((orders[0].total - 27.54).abs() < 1e-9);
    assert!(h.surface.last_mount().unwrap().contains("2x Burger"));
}

#[tokio::test]
async fn test_hydration_restores_session_and_cart_across_runtimes() {
    let kv = Arc::new(MemoryKeyValueStore::new());

    let first = harness_with_kv("#/login", kv.clone());
    first.runtime.start().await.expect("start failed");
    first
        .runtime
        .login_view()
        .submit("ada@example.com", "pw")
        .await
        .expect("login failed");
    settle(&first).await;
    first.runtime.menu_view().add_item(2).await.expect("add failed");

    // A second runtime over the same durable store: the session and cart
    // come back and the menu route renders without a redirect.
    let second = harness_with_kv("#/menu", kv);
    second.runtime.start().await.expect("start failed");
    settle(&second).await;

    let state = second.runtime.store().state();
    assert_eq!(state.session.unwrap().id, 2);
    assert_eq!(state.cart, vec![CartLine { product_id: 2, qty: 1 }]);
    assert_eq!(second.navigator.fragment_value(), "#/menu");
}

#[tokio::test]
async fn test_logout_clears_session_and_returns_to_login() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");
    h.runtime
        .login_view()
        .submit("ada@example.com", "pw")
        .await
        .expect("login failed");
    settle(&h).await;

    h.runtime.logout().await.expect("logout failed");
    settle(&h).await;

    assert!(h.runtime.store().state().session.is_none());
    assert_eq!(h.navigator.fragment_value(), "#/login");
    assert_eq!(h.kv.get("comanda_session"), Some(serde_json::Value::Null));
}

#[tokio::test]
async fn test_unknown_fragment_falls_back_to_not_found_for_user() {
    let h = harness("#/login");
    h.runtime.start().await.expect("start failed");
    h.runtime
        .login_view()
        .submit("ada@example.com", "pw")
        .await
        .expect("login failed");
    settle(&h).await;

    h.navigator.set_fragment("#/does-not-exist");
    settle(&h).await;
    assert!(h.surface.last_mount().unwrap().contains("404 - Not Found"));
}
