use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    /// Uniform login failure for unknown email, inactive account and wrong
    /// password alike. Keeping these indistinguishable blocks account
    /// enumeration at the login boundary.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User is inactive")]
    Inactive,
    /// Auth-context lookup failure ("who am I" against a deleted row).
    #[error("User not found")]
    UnknownUser,
    /// Admin-surface lookup failure (target of a delete or role change).
    #[error("User not found")]
    NotFound,
    #[error("User already exists")]
    AlreadyExists,
    #[error("Role '{0}' is not configured")]
    RoleNotConfigured(&'static str),
    #[error("Invalid role")]
    InvalidRole,
    #[error("Admin role cannot be changed")]
    AdminRoleImmutable,
    #[error("Admin users must be removed via manual database action")]
    AdminDeletionBlocked,
    #[error("Display name cannot be empty")]
    EmptyDisplayName,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status_code = match self {
            UserError::InvalidCredentials | UserError::Inactive | UserError::UnknownUser => {
                StatusCode::UNAUTHORIZED
            }
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::AlreadyExists
            | UserError::RoleNotConfigured(_)
            | UserError::InvalidRole
            | UserError::AdminRoleImmutable
            | UserError::AdminDeletionBlocked
            | UserError::EmptyDisplayName => StatusCode::BAD_REQUEST,
        };

        ErrorResponse::send(self.to_string())
            .with_status(status_code)
            .into_response()
    }
}
