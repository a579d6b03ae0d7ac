use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use std::sync::PoisonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Invalid field schema: {0}")]
    Schema(String),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json rejection: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::JsonRejection(rejection) => rejection.status(),
            AppError::UnknownKind(_)
            | AppError::Schema(_)
            | AppError::SerdeError(_)
            | AppError::Http(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Internal(format!("poisoned lock: {}", err))
    }
}

impl From<AppError> for axum::Error {
    fn from(val: AppError) -> Self {
        axum::Error::new(val.to_string())
    }
}
