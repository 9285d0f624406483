use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    PaymentRequired(String),
    #[error("authentication is required")]
    UnauthenticatedError,
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    pub fn not_found() -> Self {
        Self::EntityNotFound("No result for this search!".into())
    }

    pub fn payment_required() -> Self {
        Self::PaymentRequired("Your payment was not found!".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED.into_response(),
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED.into_response(),
            e @ (AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected Error").into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
