use crate::dto::admin_dto::{AssignTeacherDto, CreateUserDto, ListUsersQuery};
use crate::error::{request_error::ValidatedRequest, ApiError};
use crate::response::app_response::SuccessResponse;
use crate::state::admin_state::AdminState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn create_user(
    State(state): State<AdminState>,
    ValidatedRequest(payload): ValidatedRequest<CreateUserDto>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .admin_service
        .create_user(&payload.email, &payload.password, payload.role)
        .await?;

    Ok(SuccessResponse::send(serde_json::json!({ "user": user }))
        .with_message("User created")
        .with_status(StatusCode::CREATED))
}

pub async fn list_users(
    State(state): State<AdminState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.admin_service.list_users(query.role).await?;
    Ok(SuccessResponse::send(serde_json::json!({ "users": users })))
}

pub async fn delete_user(
    State(state): State<AdminState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.admin_service.delete_user(user_id).await?;
    Ok(SuccessResponse::send(serde_json::json!({ "deleted": true })).with_message("User deleted"))
}

pub async fn assign_teacher(
    State(state): State<AdminState>,
    ValidatedRequest(payload): ValidatedRequest<AssignTeacherDto>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.admin_service.assign_teacher(&payload.email).await?;
    Ok(SuccessResponse::send(serde_json::json!({ "user": user }))
        .with_message("Teacher role assigned"))
}
