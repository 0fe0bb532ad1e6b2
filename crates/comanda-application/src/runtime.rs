//! Runtime assembly: wires the store, views, and router into one object the
//! host embeds.
//!
//! The host owns the event sources (an initial load signal and a
//! fragment-change signal) and forwards both here; everything downstream of
//! those signals, including redirects re-entering the router, is handled by
//! the runtime.

use crate::auth::AuthService;
use crate::checkout::CheckoutUseCase;
use crate::router::Router;
use crate::view::{Navigator, Surface};
use crate::views::{
    AdminDashboardView, LoginView, MenuView, MyOrdersView, NotFoundView, ProfileView, RegisterView,
};
use comanda_core::error::Result;
use comanda_core::kv::KeyValueStore;
use comanda_core::menu::MenuRepository;
use comanda_core::order::OrderRepository;
use comanda_core::route::Route;
use comanda_core::state::Store;
use comanda_core::user::UserRepository;
use comanda_infrastructure::{
    AppConfig, HttpClient, HttpMenuRepository, HttpOrderRepository, HttpUserRepository,
    JsonFileKeyValueStore,
};
use std::collections::HashMap;
use std::sync::Arc;

/// External collaborators the runtime is assembled from.
///
/// Production hosts use [`AppRuntime::from_config`]; tests inject in-memory
/// implementations of each seam.
pub struct RuntimeDeps {
    pub kv: Arc<dyn KeyValueStore>,
    pub menu: Arc<dyn MenuRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub users: Arc<dyn UserRepository>,
    pub navigator: Arc<dyn Navigator>,
    pub surface: Arc<dyn Surface>,
}

/// The assembled application.
pub struct AppRuntime {
    store: Store,
    router: Router,
    navigator: Arc<dyn Navigator>,
    menu_view: Arc<MenuView>,
    admin_view: Arc<AdminDashboardView>,
    login_view: Arc<LoginView>,
    register_view: Arc<RegisterView>,
}

impl AppRuntime {
    /// Wires the full object graph from the given collaborators.
    pub fn new(deps: RuntimeDeps) -> Self {
        let store = Store::new(deps.kv);
        let auth = Arc::new(AuthService::new(deps.users));
        let checkout = Arc::new(CheckoutUseCase::new(
            store.clone(),
            Arc::clone(&deps.orders),
            Arc::clone(&deps.navigator),
        ));

        let login_view = Arc::new(LoginView::new(
            store.clone(),
            Arc::clone(&auth),
            Arc::clone(&deps.surface),
            Arc::clone(&deps.navigator),
        ));
        let register_view = Arc::new(RegisterView::new(
            auth,
            Arc::clone(&deps.surface),
            Arc::clone(&deps.navigator),
        ));
        let menu_view = Arc::new(MenuView::new(
            store.clone(),
            deps.menu,
            checkout,
            Arc::clone(&deps.surface),
        ));
        let my_orders_view = Arc::new(MyOrdersView::new(
            store.clone(),
            Arc::clone(&deps.orders),
            Arc::clone(&deps.surface),
            Arc::clone(&deps.navigator),
        ));
        let admin_view = Arc::new(AdminDashboardView::new(
            store.clone(),
            Arc::clone(&deps.orders),
            Arc::clone(&deps.surface),
        ));
        let profile_view = Arc::new(ProfileView::new(
            store.clone(),
            deps.orders,
            Arc::clone(&deps.surface),
            Arc::clone(&deps.navigator),
        ));
        let not_found = Arc::new(NotFoundView::new(Arc::clone(&deps.surface)));

        let mut routes: HashMap<Route, Arc<dyn crate::view::View>> = HashMap::new();
        routes.insert(Route::Login, login_view.clone());
        routes.insert(Route::Register, register_view.clone());
        routes.insert(Route::Menu, menu_view.clone());
        routes.insert(Route::Orders, my_orders_view);
        routes.insert(Route::Admin, admin_view.clone());
        routes.insert(Route::Profile, profile_view);

        let router = Router::new(
            store.clone(),
            Arc::clone(&deps.navigator),
            routes,
            not_found,
        );

        Self {
            store,
            router,
            navigator: deps.navigator,
            menu_view,
            admin_view,
            login_view,
            register_view,
        }
    }

    /// Assembles the production graph: HTTP repositories against the
    /// configured record store and the file-backed durable store.
    pub fn from_config(
        config: &AppConfig,
        navigator: Arc<dyn Navigator>,
        surface: Arc<dyn Surface>,
    ) -> Result<Self> {
        let client = HttpClient::new(&config.api_base_url);
        let kv = Arc::new(JsonFileKeyValueStore::new(config.storage_path()?));
        Ok(Self::new(RuntimeDeps {
            kv,
            menu: Arc::new(HttpMenuRepository::new(client.clone())),
            orders: Arc::new(HttpOrderRepository::new(client.clone())),
            users: Arc::new(HttpUserRepository::new(client)),
            navigator,
            surface,
        }))
    }

    /// Initial load signal: restore persisted session and cart, then run
    /// the first navigation cycle.
    pub async fn start(&self) -> Result<()> {
        self.store.hydrate();
        tracing::info!("runtime started");
        self.router.dispatch().await
    }

    /// Fragment-change signal from the host.
    pub async fn fragment_changed(&self) -> Result<()> {
        self.router.dispatch().await
    }

    /// Logout gesture from the shared layout chrome.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear_session();
        self.navigator.set_fragment("#/login");
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn menu_view(&self) -> &Arc<MenuView> {
        &self.menu_view
    }

    pub fn admin_view(&self) -> &Arc<AdminDashboardView> {
        &self.admin_view
    }

    pub fn login_view(&self) -> &Arc<LoginView> {
        &self.login_view
    }

    pub fn register_view(&self) -> &Arc<RegisterView> {
        &self.register_view
    }
}
