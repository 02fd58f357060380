use std::sync::Arc;

use content::ModuleCatalog;
use track_core::model::ModuleId;
use track_core::quiz::QuizSession;

use crate::error::QuizServiceError;

/// Starts quiz sessions from module content.
///
/// Each page view gets its own fresh session; sessions never share
/// state and are dropped with the view.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<ModuleCatalog>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<ModuleCatalog>) -> Self {
        Self { catalog }
    }

    /// Start a new quiz session for the given module.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownModule` if the module is not
    /// in the catalog, or propagates `QuizError` if its question list
    /// is empty (both are authoring faults caught at load in practice).
    pub fn start_quiz(&self, id: ModuleId) -> Result<QuizSession, QuizServiceError> {
        let module = self
            .catalog
            .module(id)
            .ok_or(QuizServiceError::UnknownModule(id))?;
        let session = QuizSession::new(module.questions().to_vec())?;
        tracing::debug!(
            module = %id,
            questions = session.total_questions(),
            "quiz session started"
        );
        Ok(session)
    }
}
