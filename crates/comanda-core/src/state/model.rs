//! Application state snapshot models.

use crate::cart::CartLine;
use crate::menu::MenuItem;
use crate::order::Order;
use crate::session::Session;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// UI filter/search state.
///
/// Recognized keys are typed fields; any other key arriving in a patch is
/// retained in `extra` with no defined effect, mirroring the
/// configuration-options posture of the rest of the runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Active category chip on the menu view ("All" shows everything).
    #[serde(rename = "menuCategory")]
    pub menu_category: String,
    /// Free-text search on the menu view.
    #[serde(rename = "menuSearch")]
    pub menu_search: String,
    /// Status filter on the admin dashboard ("all" or a flow value).
    #[serde(rename = "adminFilter")]
    pub admin_filter: String,
    /// Unrecognized keys, accepted but inert.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            menu_category: "All".to_string(),
            menu_search: String::new(),
            admin_filter: "all".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// A shallow patch over [`UiState`].
///
/// Only the keys present in the patch replace their counterparts; everything
/// else is carried over from the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPatch {
    #[serde(rename = "menuCategory", skip_serializing_if = "Option::is_none")]
    pub menu_category: Option<String>,
    #[serde(rename = "menuSearch", skip_serializing_if = "Option::is_none")]
    pub menu_search: Option<String>,
    #[serde(rename = "adminFilter", skip_serializing_if = "Option::is_none")]
    pub admin_filter: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UiPatch {
    /// A patch setting only the menu category.
    pub fn menu_category(value: impl Into<String>) -> Self {
        Self {
            menu_category: Some(value.into()),
            ..Self::default()
        }
    }

    /// A patch setting only the menu search text.
    pub fn menu_search(value: impl Into<String>) -> Self {
        Self {
            menu_search: Some(value.into()),
            ..Self::default()
        }
    }

    /// A patch setting only the admin status filter.
    pub fn admin_filter(value: impl Into<String>) -> Self {
        Self {
            admin_filter: Some(value.into()),
            ..Self::default()
        }
    }

    /// Applies this patch to `ui`, shallow-merge semantics.
    pub fn apply(self, ui: &mut UiState) {
        if let Some(category) = self.menu_category {
            ui.menu_category = category;
        }
        if let Some(search) = self.menu_search {
            ui.menu_search = search;
        }
        if let Some(filter) = self.admin_filter {
            ui.admin_filter = filter;
        }
        ui.extra.extend(self.extra);
    }
}

/// The single live snapshot of the whole runtime.
///
/// Immutable by convention: every store action replaces it wholesale; callers
/// of [`Store::state`](crate::state::Store::state) receive a clone and must
/// not expect later mutations to show through it. Only `session` and `cart`
/// are ever persisted; collections are always re-fetched from the record
/// store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Active session, or `None` when logged out.
    pub session: Option<Session>,
    /// User records loaded from the record store.
    pub users: Vec<User>,
    /// Catalog loaded from the record store.
    pub menu: Vec<MenuItem>,
    /// Orders loaded from the record store.
    pub orders: Vec<Order>,
    /// Quantity-only cart lines.
    pub cart: Vec<CartLine>,
    /// Filter/search state.
    pub ui: UiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_defaults() {
        let ui = UiState::default();
        assert_eq!(ui.menu_category, "All");
        assert_eq!(ui.menu_search, "");
        assert_eq!(ui.admin_filter, "all");
        assert!(ui.extra.is_empty());
    }

    #[test]
    fn test_patch_is_shallow() {
        let mut ui = UiState::default();
        UiPatch::menu_search("taco").apply(&mut ui);
        assert_eq!(ui.menu_search, "taco");
        // untouched keys keep their previous values
        assert_eq!(ui.menu_category, "All");
        assert_eq!(ui.admin_filter, "all");
    }

    #[test]
    fn test_patch_keeps_unrecognized_keys_inert() {
        let mut ui = UiState::default();
        let patch = UiPatch {
            extra: BTreeMap::from([(
                "sidebarOpen".to_string(),
                serde_json::Value::Bool(true),
            )]),
            ..UiPatch::default()
        };
        patch.apply(&mut ui);
        assert_eq!(
            ui.extra.get("sidebarOpen"),
            Some(&serde_json::Value::Bool(true))
        );
        assert_eq!(ui.menu_category, "All");
    }

    #[test]
    fn test_default_app_state() {
        let state = AppState::default();
        assert!(state.session.is_none());
        assert!(state.cart.is_empty());
        assert!(state.menu.is_empty());
    }
}
