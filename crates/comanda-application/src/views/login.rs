//! Login view.

use crate::auth::AuthService;
use crate::view::{Navigator, Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::route::guard::role_home;
use comanda_core::state::Store;
use std::sync::Arc;

/// Renders the login form and handles the submit gesture.
pub struct LoginView {
    store: Store,
    auth: Arc<AuthService>,
    surface: Arc<dyn Surface>,
    navigator: Arc<dyn Navigator>,
}

impl LoginView {
    pub fn new(
        store: Store,
        auth: Arc<AuthService>,
        surface: Arc<dyn Surface>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            auth,
            surface,
            navigator,
        }
    }

    /// Submit gesture: validate credentials, install the session, and move
    /// to the role's home route.
    ///
    /// Invalid credentials surface a notice and leave the state untouched.
    pub async fn submit(&self, email: &str, password: &str) -> Result<()> {
        match self.auth.login(email, password).await? {
            Some(user) => {
                let home = role_home(user.role);
                self.store.set_session(Some(user.to_session()));
                self.navigator.set_fragment(&home.fragment());
                Ok(())
            }
            None => {
                self.surface.notify("Invalid credentials");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl View for LoginView {
    async fn render(&self) -> Result<()> {
        self.surface.mount(
            r##"<div class="centerBox">
  <div class="card authCard">
    <div class="brand"><span class="logo"></span></div>
    <h2>Comanda</h2>
    <p>Login to your account</p>
    <form id="loginForm">
      <div class="field">
        <label>Email</label>
        <input name="email" required />
      </div>
      <div class="field">
        <label>Password</label>
        <input name="password" type="password" required />
      </div>
      <button class="btn">Sign In</button>
    </form>
    <div class="footerNote">Don't have an account? <a href="#/register">Register</a></div>
  </div>
</div>"##,
        );
        Ok(())
    }
}
