use crate::config::database::{Database, DatabaseTrait};
use crate::entity::refresh_token::RefreshToken;
use crate::error::db_error::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Ledger of hashed refresh tokens. Rows are inserted on issue, marked
/// revoked on rotation or logout, and never purged here.
#[async_trait]
pub trait RefreshTokenRepositoryTrait: Send + Sync {
    async fn insert(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbError>;
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DbError>;
    /// Guarded revoke: returns `false` when the row was already revoked, so
    /// concurrent redemption of the same token has a first-wins outcome.
    async fn revoke(&self, id: i64) -> Result<bool, DbError>;
}

#[derive(Clone)]
pub struct RefreshTokenRepository {
    db_conn: Arc<Database>,
}

impl RefreshTokenRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[async_trait]
impl RefreshTokenRepositoryTrait for RefreshTokenRepository {
    async fn insert(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO refresh_tokens (token_hash, user_id, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .execute(self.db_conn.get_pool())
        .await?;
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DbError> {
        let row = sqlx::query_as::<_, RefreshToken>(
            "SELECT id, token_hash, user_id, expires_at, revoked_at \
             FROM refresh_tokens WHERE token_hash = $1",
        )
        .bind(token_hash)
        .fetch_optional(self.db_conn.get_pool())
        .await?;
        Ok(row)
    }

    async fn revoke(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .execute(self.db_conn.get_pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
