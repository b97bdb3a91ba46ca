pub mod authorization_error;
pub mod db_error;
pub mod request_error;
pub mod token_error;
pub mod user_error;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified application error type. Every component-level failure carries an
/// HTTP status and a human-readable message through `IntoResponse`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Authorization(#[from] authorization_error::AuthorizationError),
    #[error(transparent)]
    Token(#[from] token_error::TokenError),
    #[error(transparent)]
    User(#[from] user_error::UserError),
    #[error(transparent)]
    Db(#[from] db_error::DbError),
    #[error(transparent)]
    Request(#[from] request_error::RequestError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::Db(db_error::DbError::from(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Authorization(error) => error.into_response(),
            ApiError::Token(error) => error.into_response(),
            ApiError::User(error) => error.into_response(),
            ApiError::Db(error) => error.into_response(),
            ApiError::Request(error) => error.into_response(),
            ApiError::Internal(_) => crate::response::app_response::ErrorResponse::send(
                "Internal server error".to_string(),
            )
            .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        }
    }
}
