use std::sync::Arc;

use services::TrainerService;

pub trait UiApp: Send + Sync {
    fn trainer(&self) -> Arc<TrainerService>;
    fn version(&self) -> &'static str;
}

#[derive(Clone)]
pub struct AppContext {
    trainer: Arc<TrainerService>,
    version: &'static str,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            trainer: app.trainer(),
            version: app.version(),
        }
    }

    #[must_use]
    pub fn trainer(&self) -> Arc<TrainerService> {
        Arc::clone(&self.trainer)
    }

    #[must_use]
    pub fn version(&self) -> &'static str {
        self.version
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
