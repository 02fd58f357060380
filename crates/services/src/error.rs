//! Shared error types for the services crate.

use thiserror::Error;

use content::CatalogError;
use track_core::model::ModuleId;
use track_core::quiz::QuizError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("no module with id {0}")]
    UnknownModule(ModuleId),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
