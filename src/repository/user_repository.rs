use crate::config::database::{Database, DatabaseTrait};
use crate::entity::user::{NewUser, ProfileFields, User};
use crate::error::db_error::DbError;
use async_trait::async_trait;
use std::sync::Arc;

const USER_COLUMNS: &str = "u.id, u.email, u.password_hash, u.role_id, r.name AS role_name, \
     u.is_active, u.display_name, u.full_name, u.title, u.phone, u.address, u.avatar_url, \
     u.created_at";

/// Credential-store seam. The sqlx implementation below is the production
/// store; tests substitute an in-memory double.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError>;
    async fn insert(&self, new_user: NewUser) -> Result<User, DbError>;
    async fn update_role(&self, user_id: i64, role_id: i64) -> Result<(), DbError>;
    async fn update_role_and_activity(
        &self,
        user_id: i64,
        role_id: i64,
        is_active: bool,
    ) -> Result<(), DbError>;
    async fn update_profile(&self, user_id: i64, fields: ProfileFields) -> Result<(), DbError>;
    async fn list_by_role(&self, role_id: i64) -> Result<Vec<User>, DbError>;
    async fn delete(&self, user_id: i64) -> Result<(), DbError>;
}

#[derive(Clone)]
pub struct UserRepository {
    db_conn: Arc<Database>,
}

impl UserRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id WHERE u.email = $1"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(self.db_conn.get_pool())
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id WHERE u.id = $1"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await?;
        Ok(user)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash, role_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role_id)
        .fetch_one(self.db_conn.get_pool())
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            DbError::SomethingWentWrong("inserted user row is missing".to_string())
        })
    }

    async fn update_role(&self, user_id: i64, role_id: i64) -> Result<(), DbError> {
        sqlx::query("UPDATE users SET role_id = $1 WHERE id = $2")
            .bind(role_id)
            .bind(user_id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(())
    }

    async fn update_role_and_activity(
        &self,
        user_id: i64,
        role_id: i64,
        is_active: bool,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE users SET role_id = $1, is_active = $2 WHERE id = $3")
            .bind(role_id)
            .bind(is_active)
            .bind(user_id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(())
    }

    async fn update_profile(&self, user_id: i64, fields: ProfileFields) -> Result<(), DbError> {
        sqlx::query(
            "UPDATE users SET display_name = $1, full_name = $2, title = $3, phone = $4, \
             address = $5, avatar_url = $6 WHERE id = $7",
        )
        .bind(&fields.display_name)
        .bind(&fields.full_name)
        .bind(&fields.title)
        .bind(&fields.phone)
        .bind(&fields.address)
        .bind(&fields.avatar_url)
        .bind(user_id)
        .execute(self.db_conn.get_pool())
        .await?;
        Ok(())
    }

    async fn list_by_role(&self, role_id: i64) -> Result<Vec<User>, DbError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE u.role_id = $1 ORDER BY u.created_at DESC"
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(role_id)
            .fetch_all(self.db_conn.get_pool())
            .await?;
        Ok(users)
    }

    async fn delete(&self, user_id: i64) -> Result<(), DbError> {
        // refresh tokens go with the row via ON DELETE CASCADE
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(())
    }
}
