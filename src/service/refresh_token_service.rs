use crate::config::parameter;
use crate::entity::refresh_token::RefreshToken;
use crate::error::{token_error::TokenError, ApiError};
use crate::repository::refresh_token_repository::RefreshTokenRepositoryTrait;
use crate::service::token_service::TokenService;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// A freshly issued refresh token. The raw value exists only here, on its way
/// back to the caller; storage keeps the digest.
#[derive(Clone, Debug)]
pub struct IssuedRefresh {
    pub raw: String,
    pub expires_at: DateTime<Utc>,
}

/// Ledger orchestration: issue, redeem-and-rotate, revoke. Rotate-on-use:
/// every successful redemption revokes the presented row and inserts exactly
/// one replacement.
#[derive(Clone)]
pub struct RefreshTokenService {
    repo: Arc<dyn RefreshTokenRepositoryTrait>,
    tokens: TokenService,
    ttl_days: i64,
}

impl RefreshTokenService {
    pub fn new(
        repo: Arc<dyn RefreshTokenRepositoryTrait>,
        tokens: TokenService,
        ttl_days: i64,
    ) -> Self {
        Self { repo, tokens, ttl_days }
    }

    pub fn ttl_days_from_env() -> i64 {
        parameter::get_i64("REFRESH_TOKEN_TTL_DAYS")
    }

    fn expiry(&self) -> DateTime<Utc> {
        Utc::now() + Duration::days(self.ttl_days)
    }

    /// Persist a new ledger row for `user_id` and hand back the raw token.
    pub async fn issue(&self, user_id: i64) -> Result<IssuedRefresh, ApiError> {
        let raw = self.tokens.generate_refresh_token();
        let expires_at = self.expiry();
        self.repo
            .insert(user_id, &self.tokens.hash_refresh_token(&raw), expires_at)
            .await?;
        Ok(IssuedRefresh { raw, expires_at })
    }

    /// Look up the presented token and fail unless the row is live.
    pub async fn lookup(&self, raw: &str) -> Result<RefreshToken, ApiError> {
        let hash = self.tokens.hash_refresh_token(raw);
        let row = self
            .repo
            .find_by_hash(&hash)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if !row.is_live(Utc::now()) {
            warn!(user_id = row.user_id, "rejected dead refresh token");
            return Err(TokenError::InvalidRefreshToken.into());
        }
        Ok(row)
    }

    /// Revoke `row` and issue its replacement. The revoke is guarded on
    /// `revoked_at IS NULL`, so when two callers race on the same token the
    /// first wins and the second observes an already-revoked row.
    pub async fn rotate(&self, row: &RefreshToken) -> Result<IssuedRefresh, ApiError> {
        if !self.repo.revoke(row.id).await? {
            warn!(user_id = row.user_id, "lost rotation race on refresh token");
            return Err(TokenError::InvalidRefreshToken.into());
        }
        let issued = self.issue(row.user_id).await?;
        info!(user_id = row.user_id, "refresh token rotated");
        Ok(issued)
    }

    /// Explicit logout. Fails with `InvalidRefreshToken` when the row is
    /// already revoked or expired: each token is single-use, so a token
    /// consumed by a refresh cannot be logged out again.
    pub async fn revoke(&self, raw: &str) -> Result<(), ApiError> {
        let row = self.lookup(raw).await?;
        if !self.repo.revoke(row.id).await? {
            return Err(TokenError::InvalidRefreshToken.into());
        }
        info!(user_id = row.user_id, "refresh token revoked");
        Ok(())
    }
}
