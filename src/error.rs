use crate::core::models::draft::ValidationErrors;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("question {0} not found")]
    QuestionNotFound(i32),

    #[error("draft is not submittable: {0}")]
    InvalidDraft(ValidationErrors),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("business error: {0}")]
    BusinessError(String),
}
