use crate::dto::user_dto::UpdateProfileDto;
use crate::error::{request_error::ValidatedRequest, ApiError};
use crate::middleware::auth::CurrentUser;
use crate::response::app_response::SuccessResponse;
use crate::state::user_state::UserState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Extension;

pub async fn update_profile(
    State(state): State<UserState>,
    Extension(current): Extension<CurrentUser>,
    ValidatedRequest(payload): ValidatedRequest<UpdateProfileDto>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .update_profile(current.user_id, payload)
        .await?;

    Ok(SuccessResponse::send(serde_json::json!({ "user": user }))
        .with_message("Profile updated"))
}
