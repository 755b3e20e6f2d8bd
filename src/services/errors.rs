use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist; rendered as 404.
    #[error("{0}")]
    NotFound(String),

    /// Submitted data was rejected; rendered as 400.
    #[error("Form error: {0}")]
    Form(String),

    /// Store failure, passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Form(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
