use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Missing access token")]
    MissingToken,
    /// Signature, expiry and tamper failures all normalize to this variant so
    /// verification internals never leak to the client.
    #[error("Invalid or expired token")]
    InvalidOrExpired,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Refresh token required")]
    MissingRefreshToken,
    #[error("JWT_ACCESS_SECRET is not configured")]
    SecretNotConfigured,
    #[error("Token error: {0}")]
    TokenCreationError(String),
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let status_code = match self {
            TokenError::MissingToken
            | TokenError::InvalidOrExpired
            | TokenError::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            TokenError::MissingRefreshToken => StatusCode::BAD_REQUEST,
            TokenError::SecretNotConfigured | TokenError::TokenCreationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ErrorResponse::send(self.to_string())
            .with_status(status_code)
            .into_response()
    }
}
