use crate::dto::auth_dto::UserSummaryDto;
use crate::dto::user_dto::UpdateProfileDto;
use crate::entity::user::ProfileFields;
use crate::error::{user_error::UserError, ApiError};
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::auth_service::summarize;
use std::sync::Arc;

/// Profile mutation. The only flow allowed to touch the profile fields.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { users }
    }

    /// Merge the partial changes against the stored row; absent fields keep
    /// their current value.
    pub async fn update_profile(
        &self,
        user_id: i64,
        changes: UpdateProfileDto,
    ) -> Result<UserSummaryDto, ApiError> {
        let existing = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        if let Some(name) = &changes.display_name {
            if name.trim().is_empty() {
                return Err(UserError::EmptyDisplayName.into());
            }
        }

        let fields = ProfileFields {
            display_name: changes.display_name.or(existing.display_name),
            full_name: changes.full_name.or(existing.full_name),
            title: changes.title.or(existing.title),
            phone: changes.phone.or(existing.phone),
            address: changes.address.or(existing.address),
            avatar_url: changes.avatar_url.or(existing.avatar_url),
        };

        self.users.update_profile(user_id, fields).await?;
        let updated = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;
        summarize(&updated)
    }
}
