use crate::config::parameter;
use crate::dto::auth_dto::{
    LoginDto, LogoutRequestDto, RefreshRequestDto, RegisterDto, SessionResponseDto,
};
use crate::error::{request_error::ValidatedRequest, token_error::TokenError, ApiError};
use crate::middleware::auth::CurrentUser;
use crate::response::app_response::SuccessResponse;
use crate::state::auth_state::AuthState;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use tracing::info;

const REFRESH_COOKIE: &str = "refreshToken";

/// HTTP-only, same-site-lax cookie carrying the raw refresh token. The body
/// never echoes it back.
fn refresh_cookie(token: &str) -> String {
    let max_age_seconds = parameter::get_i64("REFRESH_TOKEN_TTL_DAYS") * 24 * 60 * 60;
    format!("{REFRESH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}")
}

fn clear_refresh_cookie() -> String {
    format!("{REFRESH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// A blank token in the body counts as absent, same as a blank cookie.
fn read_body_token(token: Option<Option<String>>) -> Option<String> {
    token.flatten().filter(|token| !token.is_empty())
}

fn read_refresh_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == REFRESH_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

pub async fn register(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<RegisterDto>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((
        [(header::SET_COOKIE, refresh_cookie(&session.refresh_token))],
        SuccessResponse::send(SessionResponseDto::from(&session))
            .with_message("User registered")
            .with_status(StatusCode::CREATED),
    ))
}

pub async fn login(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<LoginDto>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        [(header::SET_COOKIE, refresh_cookie(&session.refresh_token))],
        SuccessResponse::send(SessionResponseDto::from(&session)),
    ))
}

/// Token comes from the cookie when present, otherwise the body.
pub async fn refresh(
    State(state): State<AuthState>,
    headers: HeaderMap,
    payload: Option<Json<RefreshRequestDto>>,
) -> Result<impl IntoResponse, ApiError> {
    let presented = read_refresh_cookie(&headers)
        .or_else(|| read_body_token(payload.map(|Json(body)| body.refresh_token)))
        .ok_or(TokenError::MissingRefreshToken)?;

    let session = state.auth_service.refresh(&presented).await?;

    Ok((
        [(header::SET_COOKIE, refresh_cookie(&session.refresh_token))],
        SuccessResponse::send(SessionResponseDto::from(&session)),
    ))
}

pub async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
    payload: Option<Json<LogoutRequestDto>>,
) -> Result<impl IntoResponse, ApiError> {
    let presented = read_refresh_cookie(&headers)
        .or_else(|| read_body_token(payload.map(|Json(body)| body.refresh_token)))
        .ok_or(TokenError::MissingRefreshToken)?;

    state.auth_service.logout(&presented).await?;
    info!("session logged out");

    Ok((
        [(header::SET_COOKIE, clear_refresh_cookie())],
        SuccessResponse::send(serde_json::json!({ "loggedOut": true })).with_message("Logged out"),
    ))
}

pub async fn me(
    State(state): State<AuthState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.auth_service.get_user_by_id(current.user_id).await?;
    Ok(SuccessResponse::send(serde_json::json!({ "user": user })))
}
