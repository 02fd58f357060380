use std::sync::Arc;

use services::{ModuleService, QuizService};

/// App-facing surface the composition root provides to the UI.
pub trait UiApp: Send + Sync {
    fn modules(&self) -> Arc<ModuleService>;
    fn quizzes(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    modules: Arc<ModuleService>,
    quizzes: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            modules: app.modules(),
            quizzes: app.quizzes(),
        }
    }

    #[must_use]
    pub fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
