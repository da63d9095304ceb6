use thiserror::Error;

use crate::model::{ParseLanguageError, QuestionError, SessionSummaryError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
    #[error(transparent)]
    Language(#[from] ParseLanguageError),
}
