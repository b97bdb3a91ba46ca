use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record. `role_name` is denormalized into every read through a
/// join on the role catalog so callers never trust a stale role claim.
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role_id: i64,
    pub role_name: String,
    pub is_active: bool,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Final profile column values for an update; the service merges the
/// caller's partial changes against the stored row before building this.
#[derive(Clone, Debug, Default)]
pub struct ProfileFields {
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
}

/// Insert payload for a new user row.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role_id: i64,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role_name", &self.role_name)
            .field("is_active", &self.is_active)
            .finish()
    }
}
