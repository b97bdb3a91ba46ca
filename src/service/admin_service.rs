use crate::dto::auth_dto::UserSummaryDto;
use crate::entity::role::RoleName;
use crate::entity::user::NewUser;
use crate::error::{user_error::UserError, ApiError};
use crate::events::{UserCreatedEvent, UserEventPublisher};
use crate::repository::role_repository::RoleRepositoryTrait;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::auth_service::summarize;
use crate::service::password_service::PasswordService;
use std::sync::Arc;
use tracing::info;

/// Admin-driven user administration. Every operation here sits behind the
/// authentication gate plus the `admin` role gate.
#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserRepositoryTrait>,
    roles: Arc<dyn RoleRepositoryTrait>,
    passwords: PasswordService,
    events: Arc<dyn UserEventPublisher>,
}

impl AdminService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        roles: Arc<dyn RoleRepositoryTrait>,
        passwords: PasswordService,
        events: Arc<dyn UserEventPublisher>,
    ) -> Self {
        Self {
            users,
            roles,
            passwords,
            events,
        }
    }

    /// Create a teacher or student account. Admin accounts only come from
    /// bootstrap.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        role_name: RoleName,
    ) -> Result<UserSummaryDto, ApiError> {
        if role_name == RoleName::Admin {
            return Err(UserError::InvalidRole.into());
        }

        let email = email.to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::AlreadyExists.into());
        }

        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or(UserError::InvalidRole)?;

        let password_hash = self.passwords.hash(password.to_string()).await?;
        let user = self
            .users
            .insert(NewUser {
                email,
                password_hash,
                role_id: role.id,
            })
            .await?;

        self.events.publish(UserCreatedEvent {
            id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            full_name: user.full_name.clone(),
            title: user.title.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            avatar_url: user.avatar_url.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
            role: role_name,
        });

        info!(user_id = user.id, role = %role_name, "user created by admin");
        summarize(&user)
    }

    pub async fn list_users(&self, role_name: RoleName) -> Result<Vec<UserSummaryDto>, ApiError> {
        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or(UserError::InvalidRole)?;

        let users = self.users.list_by_role(role.id).await?;
        users.iter().map(summarize).collect()
    }

    /// Remove a user and, through the schema's cascade, their refresh tokens.
    /// Admin accounts are not deletable through the API.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        if user.role_name == RoleName::Admin.as_str() {
            return Err(UserError::AdminDeletionBlocked.into());
        }

        self.users.delete(user_id).await?;
        info!(user_id, "user deleted by admin");
        Ok(())
    }

    /// Promote an existing account to `teacher`. The admin role is immutable;
    /// promoting a teacher is a no-op.
    pub async fn assign_teacher(&self, email: &str) -> Result<UserSummaryDto, ApiError> {
        let email = email.to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(UserError::NotFound)?;

        if user.role_name == RoleName::Admin.as_str() {
            return Err(UserError::AdminRoleImmutable.into());
        }
        if user.role_name == RoleName::Teacher.as_str() {
            return summarize(&user);
        }

        let teacher = self
            .roles
            .find_by_name(RoleName::Teacher)
            .await?
            .ok_or(UserError::RoleNotConfigured(RoleName::Teacher.as_str()))?;

        self.users.update_role(user.id, teacher.id).await?;
        let updated = self
            .users
            .find_by_id(user.id)
            .await?
            .ok_or(UserError::NotFound)?;

        info!(user_id = updated.id, "user promoted to teacher");
        summarize(&updated)
    }
}
