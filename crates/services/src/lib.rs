#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod module_service;
pub mod quiz_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizServiceError};
pub use module_service::ModuleService;
pub use quiz_service::QuizService;
