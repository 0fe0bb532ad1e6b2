//! Collaborator traits at the edge of the runtime.
//!
//! The runtime never touches a real DOM or address bar. It talks to three
//! narrow seams instead: a [`Navigator`] owning the hash fragment, a
//! [`Surface`] that swallows markup wholesale, and [`View`]s that rebuild
//! that markup from the current state on every invocation.

use async_trait::async_trait;
use comanda_core::error::Result;

/// A registered view: an asynchronous render-and-bind function.
///
/// Rendering must be re-invocable from scratch after any store mutation;
/// a view reads whatever the store holds at the moment it re-reads it,
/// never a stale captured copy.
#[async_trait]
pub trait View: Send + Sync {
    async fn render(&self) -> Result<()>;
}

/// The navigation-fragment collaborator.
///
/// Two external signals (initial load, fragment changed) drive the router;
/// the router is the only writer of the fragment when performing a guard
/// redirect.
pub trait Navigator: Send + Sync {
    /// The current hash fragment (may be empty on first load).
    fn fragment(&self) -> String;

    /// Rewrites the hash fragment.
    fn set_fragment(&self, fragment: &str);
}

/// The render/mount collaborator.
///
/// `mount` replaces the visible content wholesale; `notify` surfaces a
/// blocking user-visible message (the original environment's alert box).
pub trait Surface: Send + Sync {
    fn mount(&self, markup: &str);

    fn notify(&self, message: &str);
}
