use crate::entity::role::RoleName;
use crate::error::{token_error::TokenError, user_error::UserError, ApiError};
use crate::state::token_state::TokenState;
use axum::extract::State;
use axum::{http, http::Request, middleware::Next, response::IntoResponse};
use tracing::warn;

/// Identity attached to the request after the authentication gate. Role and
/// activity come from a fresh store read, never from token claims, so
/// deactivation and role changes take effect immediately.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser {
    pub user_id: i64,
    pub role: RoleName,
}

/// Authentication gate: bearer token extraction, signature/expiry check,
/// then a fresh read of the referenced user before the identity is attached.
pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(TokenError::MissingToken)?;

    // expired, malformed and tampered tokens all look the same to the client
    let claims = state
        .token_service
        .decode_access(token)
        .map_err(|_| TokenError::InvalidOrExpired)?;

    let user = match state.users.find_by_id(claims.sub).await? {
        Some(user) if user.is_active => user,
        _ => {
            warn!(user_id = claims.sub, "authenticated id is missing or inactive");
            return Err(UserError::Inactive.into());
        }
    };

    let role = user
        .role_name
        .parse::<RoleName>()
        .map_err(|unknown| ApiError::Internal(unknown.to_string()))?;

    req.extensions_mut().insert(CurrentUser {
        user_id: user.id,
        role,
    });

    Ok(next.run(req).await)
}
