use crate::dto::auth_dto::{SessionDto, UserSummaryDto};
use crate::entity::role::RoleName;
use crate::entity::user::{NewUser, User};
use crate::error::{token_error::TokenError, user_error::UserError, ApiError};
use crate::events::{UserCreatedEvent, UserEventPublisher};
use crate::repository::role_repository::RoleRepositoryTrait;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::password_service::PasswordService;
use crate::service::refresh_token_service::RefreshTokenService;
use crate::service::token_service::TokenService;
use std::sync::Arc;
use tracing::{info, warn};

/// Session lifecycle: register, login, refresh, logout, identity lookup.
/// The backing stores are the only shared mutable state; nothing is cached
/// across requests.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepositoryTrait>,
    roles: Arc<dyn RoleRepositoryTrait>,
    tokens: TokenService,
    ledger: RefreshTokenService,
    passwords: PasswordService,
    events: Arc<dyn UserEventPublisher>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        roles: Arc<dyn RoleRepositoryTrait>,
        tokens: TokenService,
        ledger: RefreshTokenService,
        passwords: PasswordService,
        events: Arc<dyn UserEventPublisher>,
    ) -> Self {
        Self {
            users,
            roles,
            tokens,
            ledger,
            passwords,
            events,
        }
    }

    /// Self-registration always lands in the `student` role.
    pub async fn register(&self, email: &str, password: &str) -> Result<SessionDto, ApiError> {
        let email = email.to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::AlreadyExists.into());
        }

        let role = self
            .roles
            .find_by_name(RoleName::Student)
            .await?
            .ok_or(UserError::RoleNotConfigured(RoleName::Student.as_str()))?;

        let password_hash = self.passwords.hash(password.to_string()).await?;
        let user = self
            .users
            .insert(NewUser {
                email,
                password_hash,
                role_id: role.id,
            })
            .await?;

        self.publish_user_created(&user);
        info!(user_id = user.id, "user registered");

        self.open_session(&user).await
    }

    /// One uniform failure for unknown email, inactive account and wrong
    /// password. Distinguishing them would hand out an account oracle.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionDto, ApiError> {
        let email = email.to_lowercase();

        let user = match self.users.find_by_email(&email).await? {
            Some(user) if user.is_active => user,
            _ => return Err(UserError::InvalidCredentials.into()),
        };

        if !self
            .passwords
            .verify(password.to_string(), user.password_hash.clone())
            .await
        {
            warn!(user_id = user.id, "failed login attempt");
            return Err(UserError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "login successful");
        self.open_session(&user).await
    }

    /// Redeem a refresh token: revoke it, mint a replacement, and issue a new
    /// access token for the same user. A deactivated owner fails before the
    /// token is consumed.
    pub async fn refresh(&self, presented: &str) -> Result<SessionDto, ApiError> {
        let row = self.ledger.lookup(presented).await?;

        let user = self
            .users
            .find_by_id(row.user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;
        if !user.is_active {
            return Err(UserError::Inactive.into());
        }

        let rotated = self.ledger.rotate(&row).await?;
        let access_token = self.tokens.issue_access(user.id)?;

        Ok(SessionDto {
            access_token,
            refresh_token: rotated.raw,
            user: summarize(&user)?,
        })
    }

    pub async fn logout(&self, presented: &str) -> Result<(), ApiError> {
        self.ledger.revoke(presented).await
    }

    /// "Who am I" lookup for an already-authenticated id.
    pub async fn get_user_by_id(&self, user_id: i64) -> Result<UserSummaryDto, ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UnknownUser)?;
        summarize(&user)
    }

    async fn open_session(&self, user: &User) -> Result<SessionDto, ApiError> {
        let access_token = self.tokens.issue_access(user.id)?;
        let refresh = self.ledger.issue(user.id).await?;

        Ok(SessionDto {
            access_token,
            refresh_token: refresh.raw,
            user: summarize(user)?,
        })
    }

    fn publish_user_created(&self, user: &User) {
        match user.role_name.parse::<RoleName>() {
            Ok(role) => self.events.publish(UserCreatedEvent {
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
                role,
            }),
            Err(unknown) => warn!(user_id = user.id, "{unknown}, event not published"),
        }
    }
}

/// Build the public summary, rejecting any role name outside the catalog.
pub fn summarize(user: &User) -> Result<UserSummaryDto, ApiError> {
    let role = user
        .role_name
        .parse::<RoleName>()
        .map_err(|unknown| ApiError::Internal(unknown.to_string()))?;
    Ok(UserSummaryDto::from_user(user, role))
}
