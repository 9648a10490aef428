use std::sync::Arc;

use services::QuizService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
