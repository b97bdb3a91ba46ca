use crate::config::database::{Database, DatabaseTrait};
use crate::entity::role::{Role, RoleName};
use crate::error::db_error::DbError;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DbError>;
    /// Seed the three default roles; safe to run on every startup.
    async fn ensure_defaults(&self) -> Result<(), DbError>;
}

#[derive(Clone)]
pub struct RoleRepository {
    db_conn: Arc<Database>,
}

impl RoleRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DbError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(self.db_conn.get_pool())
            .await?;
        Ok(role)
    }

    async fn ensure_defaults(&self) -> Result<(), DbError> {
        for role in RoleName::ALL {
            sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                .bind(role.as_str())
                .execute(self.db_conn.get_pool())
                .await?;
        }
        Ok(())
    }
}
