use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::token_service::TokenService;
use std::sync::Arc;

/// State for the authentication gate: token verification plus the fresh
/// per-request user read.
#[derive(Clone)]
pub struct TokenState {
    pub token_service: TokenService,
    pub users: Arc<dyn UserRepositoryTrait>,
}

impl TokenState {
    pub fn new(db_conn: &Arc<Database>) -> Result<Self, TokenError> {
        Ok(Self {
            token_service: TokenService::from_env()?,
            users: Arc::new(UserRepository::new(db_conn)),
        })
    }
}
