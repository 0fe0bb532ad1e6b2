//! Wildcard fallback view for unrecognized fragments.

use crate::view::{Surface, View};
use async_trait::async_trait;
use comanda_core::error::Result;
use std::sync::Arc;

pub struct NotFoundView {
    surface: Arc<dyn Surface>,
}

impl NotFoundView {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self { surface }
    }
}

#[async_trait]
impl View for NotFoundView {
    async fn render(&self) -> Result<()> {
        self.surface.mount(
            r##"<div class="centerBox">
  <div class="card authCard">
    <h2>404 - Not Found</h2>
    <p>The page you are looking for does not exist.</p>
    <a class="btn" href="#/">Go home</a>
  </div>
</div>"##,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[tokio::test]
    async fn test_render_mounts_not_found_card() {
        let surface = Arc::new(RecordingSurface::new());
        let view = NotFoundView::new(surface.clone());
        view.render().await.unwrap();
        assert!(surface.last_mount().unwrap().contains("404 - Not Found"));
    }
}
