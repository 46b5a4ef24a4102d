use models::errors::ModelError;
use thiserror::Error;

pub const TERM_NOT_FOUND: &str = "Term not found";
pub const TERM_EXISTS: &str = "Term already exists";
pub const TERM_UPDATE_FAILED: &str = "Term update failed";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn term_not_found() -> Self {
        Self::NotFound(TERM_NOT_FOUND.into())
    }

    /// Caller-facing message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Duplicate(_) => Self::Conflict(TERM_EXISTS.into()),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
