use crate::response::app_response::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("Insufficient permissions")]
    InsufficientPermissions,
    /// The role gate ran without an attached identity. Unreachable when the
    /// gates are composed in the right order.
    #[error("Missing access token")]
    MissingIdentity,
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthorizationError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthorizationError::MissingIdentity => StatusCode::UNAUTHORIZED,
        };

        ErrorResponse::send(self.to_string())
            .with_status(status_code)
            .into_response()
    }
}
