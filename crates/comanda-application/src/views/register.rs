//! Registration view.

use crate::auth::AuthService;
use crate::view::{Navigator, Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use std::sync::Arc;

/// Renders the account registration form and handles the submit gesture.
///
/// New accounts are always ordinary users. On success the view navigates to
/// the login route rather than logging the account in, mirroring the usual
/// confirm-your-credentials flow.
pub struct RegisterView {
    auth: Arc<AuthService>,
    surface: Arc<dyn Surface>,
    navigator: Arc<dyn Navigator>,
}

impl RegisterView {
    pub fn new(
        auth: Arc<AuthService>,
        surface: Arc<dyn Surface>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            surface,
            navigator,
        }
    }

    /// Submit gesture: create the account and move to the login route.
    ///
    /// A duplicate email surfaces the validation message as a notice and
    /// stays on the form. Other failures propagate.
    pub async fn submit(&self, name: &str, email: &str, password: &str) -> Result<()> {
        match self.auth.register(name, email, password).await {
            Ok(_) => {
                self.surface.notify("Account created, please sign in");
                self.navigator.set_fragment("#/login");
                Ok(())
            }
            Err(err) if err.is_validation() => {
                self.surface.notify(&err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl View for RegisterView {
    async fn render(&self) -> Result<()> {
        self.surface.mount(
            r##"<div class="centerBox">
  <div class="card authCard">
    <div class="brand"><span class="logo"></span></div>
    <h2>Create account</h2>
    <p>Join Comanda to start ordering</p>
    <form id="registerForm">
      <div class="field">
        <label>Name</label>
        <input name="name" required />
      </div>
      <div class="field">
        <label>Email</label>
        <input name="email" required />
      </div>
      <div class="field">
        <label>Password</label>
        <input name="password" type="password" required />
      </div>
      <button class="btn">Register</button>
    </form>
    <div class="footerNote">Already have an account? <a href="#/login">Sign in</a></div>
  </div>
</div>"##,
        );
        Ok(())
    }
}
