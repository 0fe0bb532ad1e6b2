//! The state store: single source of truth with controlled mutation.
//!
//! The store owns the live [`AppState`] snapshot and exposes a closed set of
//! named actions. Every action follows the same protocol: normalize inputs,
//! compute the next snapshot from a clone of the current one, perform the
//! persistence side effect, replace the live snapshot, then synchronously
//! notify every subscriber in registration order with the new state.
//!
//! The store is an explicit holder object (no ambient global): tests and
//! hosts may run any number of independent stores side by side.

use crate::cart::{CartLine, validate_cart};
use crate::kv::{KeyValueStore, KeyValueStoreExt};
use crate::menu::MenuItem;
use crate::order::Order;
use crate::session::Session;
use crate::state::model::{AppState, UiPatch};
use crate::user::User;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Durable-storage key for the session.
pub const SESSION_KEY: &str = "comanda_session";
/// Durable-storage key for the cart.
pub const CART_KEY: &str = "comanda_cart";

/// Handle identifying a subscription; pass it to [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

struct StoreInner {
    state: RwLock<AppState>,
    listeners: Mutex<Vec<(SubscriberId, Listener)>>,
    next_listener_id: AtomicU64,
    kv: Arc<dyn KeyValueStore>,
}

/// The central mutable-state container of the runtime.
///
/// Cloning a `Store` yields another handle to the same state; the snapshot
/// inside is replaced wholesale by every action.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates a store holding the default snapshot, backed by `kv` for the
    /// session/cart persistence side effects.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(AppState::default()),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(1),
                kv,
            }),
        }
    }

    /// Restores session and cart from durable storage into the snapshot.
    ///
    /// This is an initializer, not an action: it runs before any view and
    /// notifies nobody. A corrupt or missing stored value falls back to the
    /// documented default (`None` session, empty cart) without raising.
    pub fn hydrate(&self) {
        let session: Option<Session> = self.inner.kv.get_or(SESSION_KEY, None);
        let mut cart: Vec<CartLine> = self.inner.kv.get_or(CART_KEY, Vec::new());
        if !validate_cart(&cart) {
            tracing::warn!("persisted cart failed validation, starting empty");
            cart = Vec::new();
        }
        let mut state = self.write_state();
        state.session = session;
        state.cart = cart;
    }

    /// Returns a clone of the current snapshot.
    ///
    /// A late re-read always reflects whatever the store holds at that
    /// moment, never a stale captured copy.
    pub fn state(&self) -> AppState {
        self.read_state().clone()
    }

    /// Registers a listener invoked synchronously after every successful
    /// action, in registration order, with the new state.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Removing an already-removed listener is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.lock_listeners().retain(|(lid, _)| *lid != id);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Replaces the session and persists it (or its explicit absence).
    pub fn set_session(&self, session: Option<Session>) {
        self.commit(|state, kv| {
            state.session = session;
            kv.set_json(SESSION_KEY, &state.session);
        });
    }

    /// Logs out: equivalent to `set_session(None)`.
    pub fn clear_session(&self) {
        self.set_session(None);
    }

    /// Replaces the loaded user collection wholesale. Not persisted.
    pub fn set_users(&self, users: Vec<User>) {
        self.commit(|state, _| state.users = users);
    }

    /// Replaces the loaded catalog wholesale. Not persisted.
    pub fn set_menu(&self, menu: Vec<MenuItem>) {
        self.commit(|state, _| state.menu = menu);
    }

    /// Replaces the loaded order collection wholesale. Not persisted.
    pub fn set_orders(&self, orders: Vec<Order>) {
        self.commit(|state, _| state.orders = orders);
    }

    /// Shallow-merges a patch into the ui state. Not persisted.
    pub fn set_ui(&self, patch: UiPatch) {
        self.commit(|state, _| patch.apply(&mut state.ui));
    }

    /// Increments the line for `product_id`, or appends a fresh qty-1 line.
    /// Persists the cart.
    pub fn add_to_cart(&self, product_id: i64) {
        self.commit(|state, kv| {
            match state.cart.iter_mut().find(|l| l.product_id == product_id) {
                Some(line) => line.qty += 1,
                None => state.cart.push(CartLine { product_id, qty: 1 }),
            }
            kv.set_json(CART_KEY, &state.cart);
        });
    }

    /// Adds `delta` to the line's quantity, dropping the line entirely when
    /// the result is zero or negative. Persists the cart.
    ///
    /// A delta far below zero is the supported "remove this line" idiom; no
    /// separate removal operation exists. Upward the quantity saturates at
    /// `u32::MAX`, so only a non-positive result ever removes a line.
    pub fn change_qty(&self, product_id: i64, delta: i64) {
        self.commit(|state, kv| {
            for line in &mut state.cart {
                if line.product_id == product_id {
                    let next = i64::from(line.qty)
                        .saturating_add(delta)
                        .clamp(0, i64::from(u32::MAX));
                    line.qty = u32::try_from(next).unwrap_or(0);
                }
            }
            state.cart.retain(|l| l.qty >= 1);
            kv.set_json(CART_KEY, &state.cart);
        });
    }

    /// Empties the cart. Persists the (now empty) cart.
    pub fn clear_cart(&self) {
        self.commit(|state, kv| {
            state.cart.clear();
            kv.set_json(CART_KEY, &state.cart);
        });
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Runs one action: clone the snapshot, mutate the clone (performing any
    /// persistence inside `mutate`), swap it in, then notify subscribers.
    fn commit(&self, mutate: impl FnOnce(&mut AppState, &dyn KeyValueStore)) {
        let next = {
            let mut guard = self.write_state();
            let mut next = guard.clone();
            mutate(&mut next, self.inner.kv.as_ref());
            *guard = next.clone();
            next
        };
        // Listener list is cloned so notification runs without holding the
        // registry lock; order is registration order.
        let listeners: Vec<Listener> = self
            .lock_listeners()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, AppState> {
        self.inner.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, AppState> {
        self.inner.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriberId, Listener)>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        map: Mutex<HashMap<String, serde_json::Value>>,
    }

    impl MapStore {
        fn seeded(key: &str, value: serde_json::Value) -> Self {
            let store = Self::default();
            store.map.lock().unwrap().insert(key.to_string(), value);
            store
        }
    }

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<serde_json::Value> {
            self.map.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: serde_json::Value) {
            self.map.lock().unwrap().insert(key.to_string(), value);
        }
    }

    fn store() -> Store {
        Store::new(Arc::new(MapStore::default()))
    }

    fn session() -> Session {
        Session {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_set_session_replaces_and_persists() {
        let kv = Arc::new(MapStore::default());
        let store = Store::new(kv.clone());
        store.set_session(Some(session()));
        assert_eq!(store.state().session, Some(session()));
        let persisted = kv.get(SESSION_KEY).unwrap();
        assert_eq!(persisted["email"], "ada@example.com");

        store.clear_session();
        assert!(store.state().session.is_none());
        assert_eq!(kv.get(SESSION_KEY), Some(serde_json::Value::Null));
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let store = store();
        store.add_to_cart(5);
        store.add_to_cart(5);
        store.add_to_cart(9);
        let cart = store.state().cart;
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0], CartLine { product_id: 5, qty: 2 });
        assert_eq!(cart[1], CartLine { product_id: 9, qty: 1 });
    }

    #[test]
    fn test_change_qty_drops_nonpositive_lines() {
        let store = store();
        store.add_to_cart(5);
        store.add_to_cart(5);
        store.change_qty(5, -1);
        assert_eq!(store.state().cart[0].qty, 1);
        store.change_qty(5, -1);
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_large_negative_delta_is_removal_and_idempotent() {
        let store = store();
        store.add_to_cart(5);
        store.change_qty(5, -999);
        assert!(store.state().cart.is_empty());
        // removing an already-absent line leaves the cart unchanged
        store.change_qty(5, -999);
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_change_qty_saturates_upward() {
        let store = store();
        store.add_to_cart(5);
        store.change_qty(5, i64::MAX);
        assert_eq!(store.state().cart[0].qty, u32::MAX);
        // a further increment stays saturated rather than wrapping or dropping
        store.change_qty(5, 1);
        assert_eq!(store.state().cart[0].qty, u32::MAX);
    }

    #[test]
    fn test_cart_invariant_holds_under_action_sequences() {
        let store = store();
        store.add_to_cart(1);
        store.add_to_cart(2);
        store.change_qty(1, 3);
        store.change_qty(2, -7);
        store.add_to_cart(2);
        store.change_qty(1, -2);
        let cart = store.state().cart;
        assert!(cart.iter().all(|l| l.qty >= 1));
        let mut ids: Vec<i64> = cart.iter().map(|l| l.product_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), cart.len());
    }

    #[test]
    fn test_clear_cart_persists_empty() {
        let kv = Arc::new(MapStore::default());
        let store = Store::new(kv.clone());
        store.add_to_cart(1);
        store.clear_cart();
        assert!(store.state().cart.is_empty());
        assert_eq!(kv.get(CART_KEY), Some(serde_json::json!([])));
    }

    #[test]
    fn test_collections_are_not_persisted() {
        let kv = Arc::new(MapStore::default());
        let store = Store::new(kv.clone());
        store.set_menu(vec![MenuItem {
            id: 1,
            name: "Soup".to_string(),
            category: "Starters".to_string(),
            price: 4.0,
        }]);
        assert_eq!(store.state().menu.len(), 1);
        assert!(kv.map.lock().unwrap().is_empty());
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (a, b) = (seen.clone(), seen.clone());
        store.subscribe(move |_| a.lock().unwrap().push("first"));
        store.subscribe(move |_| b.lock().unwrap().push("second"));
        store.set_ui(UiPatch::menu_search("x"));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let store = store();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        store.subscribe(move |state: &AppState| {
            *sink.lock().unwrap() = Some(state.cart.clone());
        });
        store.add_to_cart(7);
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some(&[CartLine { product_id: 7, qty: 1 }][..])
        );
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = store();
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);
        store.unsubscribe(id);
        store.unsubscribe(id);
        store.clear_cart();
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn test_hydrate_restores_session_and_cart() {
        let kv = Arc::new(MapStore::default());
        kv.set(SESSION_KEY, serde_json::to_value(session()).unwrap());
        kv.set(CART_KEY, serde_json::json!([{ "productId": 3, "qty": 2 }]));
        let store = Store::new(kv);
        store.hydrate();
        let state = store.state();
        assert_eq!(state.session, Some(session()));
        assert_eq!(state.cart, vec![CartLine { product_id: 3, qty: 2 }]);
    }

    #[test]
    fn test_hydrate_falls_back_on_corrupt_values() {
        let kv = Arc::new(MapStore::seeded(
            SESSION_KEY,
            serde_json::json!("%%% not a session %%%"),
        ));
        kv.set(CART_KEY, serde_json::json!({ "weird": true }));
        let store = Store::new(kv);
        store.hydrate();
        let state = store.state();
        assert!(state.session.is_none());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_hydrate_discards_invalid_cart() {
        let kv = Arc::new(MapStore::seeded(
            CART_KEY,
            serde_json::json!([{ "productId": 3, "qty": 0 }]),
        ));
        let store = Store::new(kv);
        store.hydrate();
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_ui_patch_merges_shallowly() {
        let store = store();
        store.set_ui(UiPatch::menu_category("Sides"));
        store.set_ui(UiPatch::menu_search("fries"));
        let ui = store.state().ui;
        assert_eq!(ui.menu_category, "Sides");
        assert_eq!(ui.menu_search, "fries");
    }
}
