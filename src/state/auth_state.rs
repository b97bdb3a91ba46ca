use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::events::UserEventPublisher;
use crate::repository::refresh_token_repository::RefreshTokenRepository;
use crate::repository::role_repository::RoleRepository;
use crate::repository::user_repository::UserRepository;
use crate::service::auth_service::AuthService;
use crate::service::password_service::PasswordService;
use crate::service::refresh_token_service::RefreshTokenService;
use crate::service::token_service::TokenService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
}

impl AuthState {
    pub fn new(
        db_conn: &Arc<Database>,
        events: Arc<dyn UserEventPublisher>,
    ) -> Result<Self, TokenError> {
        let tokens = TokenService::from_env()?;
        let ledger = RefreshTokenService::new(
            Arc::new(RefreshTokenRepository::new(db_conn)),
            tokens.clone(),
            RefreshTokenService::ttl_days_from_env(),
        );

        Ok(Self {
            auth_service: AuthService::new(
                Arc::new(UserRepository::new(db_conn)),
                Arc::new(RoleRepository::new(db_conn)),
                tokens,
                ledger,
                PasswordService::from_env(),
                events,
            ),
        })
    }
}
