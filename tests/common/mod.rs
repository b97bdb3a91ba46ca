use async_trait::async_trait;
use chrono::{Duration, Utc};
use school_portal::entity::refresh_token::RefreshToken;
use school_portal::entity::role::{Role, RoleName};
use school_portal::entity::user::{NewUser, ProfileFields, User};
use school_portal::error::db_error::DbError;
use school_portal::events::BroadcastUserEvents;
use school_portal::repository::refresh_token_repository::RefreshTokenRepositoryTrait;
use school_portal::repository::role_repository::RoleRepositoryTrait;
use school_portal::repository::user_repository::UserRepositoryTrait;
use school_portal::service::admin_service::AdminService;
use school_portal::service::auth_service::AuthService;
use school_portal::service::bootstrap_service::BootstrapService;
use school_portal::service::password_service::PasswordService;
use school_portal::service::refresh_token_service::RefreshTokenService;
use school_portal::service::token_service::TokenService;
use school_portal::service::user_service::UserService;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the relational store, implementing every
/// repository seam the services depend on.
#[derive(Default)]
pub struct InMemoryStore {
    roles: Mutex<Vec<Role>>,
    users: Mutex<Vec<User>>,
    tokens: Mutex<Vec<RefreshToken>>,
    next_user_id: AtomicI64,
    next_token_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_user_id: AtomicI64::new(1),
            next_token_id: AtomicI64::new(1),
            ..Self::default()
        })
    }

    pub fn set_active(&self, email: &str, is_active: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.is_active = is_active;
        }
    }

    /// Force every ledger row past its expiry.
    pub fn expire_all_tokens(&self) {
        let past = Utc::now() - Duration::days(1);
        for token in self.tokens.lock().unwrap().iter_mut() {
            token.expires_at = past;
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn live_token_count(&self) -> usize {
        let now = Utc::now();
        self.tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_live(now))
            .count()
    }

    pub fn stored_user(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    fn role_name(&self, role_id: i64) -> Result<String, DbError> {
        self.roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == role_id)
            .map(|r| r.name.clone())
            .ok_or_else(|| DbError::SomethingWentWrong("role not found".to_string()))
    }
}

#[async_trait]
impl RoleRepositoryTrait for InMemoryStore {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DbError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name.as_str())
            .cloned())
    }

    async fn ensure_defaults(&self) -> Result<(), DbError> {
        let mut roles = self.roles.lock().unwrap();
        for name in RoleName::ALL {
            if !roles.iter().any(|r| r.name == name.as_str()) {
                let id = roles.len() as i64 + 1;
                roles.push(Role {
                    id,
                    name: name.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, DbError> {
        let role_name = self.role_name(new_user.role_id)?;
        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::SeqCst),
            email: new_user.email,
            password_hash: new_user.password_hash,
            role_id: new_user.role_id,
            role_name,
            is_active: true,
            display_name: None,
            full_name: None,
            title: None,
            phone: None,
            address: None,
            avatar_url: None,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_role(&self, user_id: i64, role_id: i64) -> Result<(), DbError> {
        let role_name = self.role_name(role_id)?;
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.role_id = role_id;
            user.role_name = role_name;
        }
        Ok(())
    }

    async fn update_role_and_activity(
        &self,
        user_id: i64,
        role_id: i64,
        is_active: bool,
    ) -> Result<(), DbError> {
        let role_name = self.role_name(role_id)?;
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.role_id = role_id;
            user.role_name = role_name;
            user.is_active = is_active;
        }
        Ok(())
    }

    async fn update_profile(&self, user_id: i64, fields: ProfileFields) -> Result<(), DbError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.display_name = fields.display_name;
            user.full_name = fields.full_name;
            user.title = fields.title;
            user.phone = fields.phone;
            user.address = fields.address;
            user.avatar_url = fields.avatar_url;
        }
        Ok(())
    }

    async fn list_by_role(&self, role_id: i64) -> Result<Vec<User>, DbError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role_id == role_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: i64) -> Result<(), DbError> {
        self.users.lock().unwrap().retain(|u| u.id != user_id);
        // mirrors the schema's ON DELETE CASCADE
        self.tokens.lock().unwrap().retain(|t| t.user_id != user_id);
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepositoryTrait for InMemoryStore {
    async fn insert(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: chrono::DateTime<Utc>,
    ) -> Result<(), DbError> {
        self.tokens.lock().unwrap().push(RefreshToken {
            id: self.next_token_id.fetch_add(1, Ordering::SeqCst),
            token_hash: token_hash.to_string(),
            user_id,
            expires_at,
            revoked_at: None,
        });
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DbError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_hash == token_hash)
            .cloned())
    }

    async fn revoke(&self, id: i64) -> Result<bool, DbError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.iter_mut().find(|t| t.id == id && t.revoked_at.is_none()) {
            Some(token) => {
                token.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub const TEST_SECRET: &str = "integration-test-secret-integration";

/// Everything a test needs, wired against one shared in-memory store.
pub struct TestEnv {
    pub store: Arc<InMemoryStore>,
    pub events: Arc<BroadcastUserEvents>,
    pub tokens: TokenService,
    pub auth: AuthService,
    pub admin: AdminService,
    pub users: UserService,
    pub bootstrap: BootstrapService,
}

impl TestEnv {
    pub async fn new() -> Self {
        let store = InMemoryStore::new();
        store.ensure_defaults().await.unwrap();

        let events = Arc::new(BroadcastUserEvents::default());
        let tokens = TokenService::new(TEST_SECRET.to_string(), Duration::minutes(15));
        // minimum bcrypt cost keeps the suite fast
        let passwords = PasswordService::new(4);
        let ledger = RefreshTokenService::new(store.clone(), tokens.clone(), 30);

        let auth = AuthService::new(
            store.clone(),
            store.clone(),
            tokens.clone(),
            ledger,
            passwords.clone(),
            events.clone(),
        );
        let admin = AdminService::new(
            store.clone(),
            store.clone(),
            passwords.clone(),
            events.clone(),
        );
        let users = UserService::new(store.clone());
        let bootstrap = BootstrapService::new(store.clone(), store.clone(), passwords);

        Self {
            store,
            events,
            tokens,
            auth,
            admin,
            users,
            bootstrap,
        }
    }
}
