use crate::config::parameter;
use crate::entity::role::RoleName;
use crate::entity::user::NewUser;
use crate::error::{user_error::UserError, ApiError};
use crate::repository::role_repository::RoleRepositoryTrait;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::password_service::PasswordService;
use std::sync::Arc;
use tracing::info;

/// Startup seeding: the role catalog and, when configured, the admin account.
/// Both operations are idempotent so restarts are safe.
#[derive(Clone)]
pub struct BootstrapService {
    users: Arc<dyn UserRepositoryTrait>,
    roles: Arc<dyn RoleRepositoryTrait>,
    passwords: PasswordService,
}

impl BootstrapService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        roles: Arc<dyn RoleRepositoryTrait>,
        passwords: PasswordService,
    ) -> Self {
        Self {
            users,
            roles,
            passwords,
        }
    }

    pub async fn run_from_env(&self) -> Result<(), ApiError> {
        self.ensure_default_roles().await?;
        self.bootstrap_admin(
            parameter::get_optional("ADMIN_EMAIL"),
            parameter::get_optional("ADMIN_PASSWORD"),
        )
        .await
    }

    pub async fn ensure_default_roles(&self) -> Result<(), ApiError> {
        self.roles.ensure_defaults().await?;
        Ok(())
    }

    /// Create the admin account, or repair its role/activity when the row
    /// already exists. A no-op when either env value is absent.
    pub async fn bootstrap_admin(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<(), ApiError> {
        let (Some(email), Some(password)) = (email, password) else {
            return Ok(());
        };
        let email = email.trim().to_lowercase();

        let admin_role = self
            .roles
            .find_by_name(RoleName::Admin)
            .await?
            .ok_or(UserError::RoleNotConfigured(RoleName::Admin.as_str()))?;

        match self.users.find_by_email(&email).await? {
            None => {
                let password_hash = self.passwords.hash(password).await?;
                let user = self
                    .users
                    .insert(NewUser {
                        email,
                        password_hash,
                        role_id: admin_role.id,
                    })
                    .await?;
                info!(user_id = user.id, "admin bootstrap: created admin user");
            }
            Some(existing) => {
                if existing.role_id != admin_role.id || !existing.is_active {
                    self.users
                        .update_role_and_activity(existing.id, admin_role.id, true)
                        .await?;
                    info!(user_id = existing.id, "admin bootstrap: repaired admin user");
                } else {
                    info!(user_id = existing.id, "admin bootstrap: admin user already exists");
                }
            }
        }
        Ok(())
    }
}
