use std::sync::Arc;

use content::ModuleCatalog;

use crate::error::AppServicesError;
use crate::module_service::ModuleService;
use crate::quiz_service::QuizService;

/// Assembles app-facing services over the embedded content.
#[derive(Clone)]
pub struct AppServices {
    modules: Arc<ModuleService>,
    quizzes: Arc<QuizService>,
}

impl AppServices {
    /// Load and validate the embedded content, then wire services.
    ///
    /// This is the one place authoring errors can surface at runtime,
    /// so callers should treat a failure here as fatal.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if any authored module fails to
    /// parse or validate.
    pub fn load() -> Result<Self, AppServicesError> {
        let catalog = Arc::new(ModuleCatalog::load()?);
        tracing::info!(modules = catalog.len(), "module catalog loaded");

        Ok(Self {
            modules: Arc::new(ModuleService::new(Arc::clone(&catalog))),
            quizzes: Arc::new(QuizService::new(catalog)),
        })
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

#[cfg(test)]
mod tests {
    use super::*;
    use track_core::model::ModuleId;

    #[test]
    fn load_wires_services_over_valid_content() {
        let services = AppServices::load().unwrap();
        assert_eq!(services.modules().modules().len(), 4);
        assert!(services.quizzes().start_quiz(ModuleId::Handshake).is_ok());
    }
}
