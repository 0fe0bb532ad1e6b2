//! The hash-fragment router.
//!
//! Owns the redirect decision, never the view logic. Each navigation cycle:
//! read the fragment, ask the guard for the authorized route given the
//! current session, and either rewrite the fragment (a redirect: no view
//! runs; the resulting fragment-change signal re-enters the router with an
//! authorized route) or invoke the registered view, falling back to the
//! wildcard view for unregistered fragments.
//!
//! The guard has no hidden state, so dispatching twice with an unchanged
//! fragment and session invokes the same view again.

use crate::view::{Navigator, View};
use comanda_core::error::Result;
use comanda_core::route::{Route, guard};
use comanda_core::state::Store;
use std::collections::HashMap;
use std::sync::Arc;

/// Routing table plus dispatch protocol.
pub struct Router {
    store: Store,
    navigator: Arc<dyn Navigator>,
    routes: HashMap<Route, Arc<dyn View>>,
    wildcard: Arc<dyn View>,
}

impl Router {
    pub fn new(
        store: Store,
        navigator: Arc<dyn Navigator>,
        routes: HashMap<Route, Arc<dyn View>>,
        wildcard: Arc<dyn View>,
    ) -> Self {
        Self {
            store,
            navigator,
            routes,
            wildcard,
        }
    }

    /// Runs one navigation cycle against the current fragment and session.
    pub async fn dispatch(&self) -> Result<()> {
        let raw = self.navigator.fragment();
        let requested = Route::parse(&raw);
        let session = self.store.state().session;
        let authorized = guard(&requested, session.as_ref());

        if authorized != requested {
            // Redirect: rewrite the fragment only. The fragment-change
            // signal re-enters the router with the authorized route.
            tracing::debug!(%requested, %authorized, "redirecting");
            self.navigator.set_fragment(&authorized.fragment());
            return Ok(());
        }

        let view = self
            .routes
            .get(&authorized)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.wildcard));
        tracing::debug!(route = %authorized, "dispatching view");
        view.render().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryNavigator;
    use async_trait::async_trait;
    use comanda_core::session::{Role, Session};
    use comanda_infrastructure::MemoryKeyValueStore;
    use std::sync::Mutex;

    struct CountingView {
        hits: Mutex<u32>,
    }

    impl CountingView {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                hits: Mutex::new(0),
            })
        }

        fn hits(&self) -> u32 {
            *self.hits.lock().unwrap()
        }
    }

    #[async_trait]
    impl View for CountingView {
        async fn render(&self) -> Result<()> {
            *self.hits.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn router_with(
        fragment: &str,
        session: Option<Session>,
    ) -> (Router, Arc<MemoryNavigator>, Arc<CountingView>, Arc<CountingView>) {
        let store = Store::new(Arc::new(MemoryKeyValueStore::new()));
        store.set_session(session);
        let navigator = Arc::new(MemoryNavigator::new(fragment));
        let login = CountingView::new();
        let menu = CountingView::new();
        let wildcard = CountingView::new();
        let mut routes: HashMap<Route, Arc<dyn View>> = HashMap::new();
        routes.insert(Route::Login, login.clone());
        routes.insert(Route::Menu, menu.clone());
        let router = Router::new(store, navigator.clone(), routes, wildcard.clone());
        (router, navigator, menu, wildcard)
    }

    fn user() -> Session {
        Session {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_redirect_rewrites_fragment_and_invokes_no_view() {
        let (router, navigator, menu, wildcard) = router_with("#/menu", None);
        router.dispatch().await.unwrap();
        assert_eq!(navigator.fragment_value(), "#/login");
        assert_eq!(menu.hits(), 0);
        assert_eq!(wildcard.hits(), 0);
    }

    #[tokio::test]
    async fn test_authorized_route_invokes_registered_view() {
        let (router, navigator, menu, _) = router_with("#/menu", Some(user()));
        router.dispatch().await.unwrap();
        assert_eq!(navigator.fragment_value(), "#/menu");
        assert_eq!(menu.hits(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_is_idempotent_for_unchanged_inputs() {
        let (router, _, menu, _) = router_with("#/menu", Some(user()));
        router.dispatch().await.unwrap();
        router.dispatch().await.unwrap();
        assert_eq!(menu.hits(), 2);
    }

    #[tokio::test]
    async fn test_unregistered_route_falls_back_to_wildcard() {
        let (router, _, _, wildcard) = router_with("#/mystery", Some(user()));
        router.dispatch().await.unwrap();
        assert_eq!(wildcard.hits(), 1);
    }

    #[tokio::test]
    async fn test_redirect_converges_after_one_hop() {
        let (router, navigator, menu, _) = router_with("#/admin", Some(user()));
        router.dispatch().await.unwrap();
        assert_eq!(navigator.fragment_value(), "#/menu");
        assert_eq!(menu.hits(), 0);
        // the host relays the fragment-change signal
        router.dispatch().await.unwrap();
        assert_eq!(navigator.fragment_value(), "#/menu");
        assert_eq!(menu.hits(), 1);
    }
}
