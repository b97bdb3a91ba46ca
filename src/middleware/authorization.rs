use crate::entity::role::RoleName;
use crate::error::{authorization_error::AuthorizationError, ApiError};
use crate::middleware::auth::CurrentUser;
use axum::{http::Request, middleware::Next, response::IntoResponse};

/// Membership check against a fixed allow-list. `MissingIdentity` is only
/// reachable when the gates are composed out of order.
pub fn check(current: Option<&CurrentUser>, allowed: &[RoleName]) -> Result<(), ApiError> {
    let current = current.ok_or(AuthorizationError::MissingIdentity)?;
    if !allowed.contains(&current.role) {
        return Err(AuthorizationError::InsufficientPermissions.into());
    }
    Ok(())
}

/// Authorization gate for the admin surface; layered after the
/// authentication gate.
pub async fn require_admin(
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    check(req.extensions().get::<CurrentUser>(), &[RoleName::Admin])?;
    Ok(next.run(req).await)
}
