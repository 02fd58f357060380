use thiserror::Error;

use crate::model::ContentError;
use crate::quiz::QuizError;
use crate::viewer::ViewerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
}
