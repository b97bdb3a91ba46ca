use crate::config::database::Database;
use crate::events::UserEventPublisher;
use crate::repository::role_repository::RoleRepository;
use crate::repository::user_repository::UserRepository;
use crate::service::admin_service::AdminService;
use crate::service::password_service::PasswordService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminState {
    pub admin_service: AdminService,
}

impl AdminState {
    pub fn new(db_conn: &Arc<Database>, events: Arc<dyn UserEventPublisher>) -> Self {
        Self {
            admin_service: AdminService::new(
                Arc::new(UserRepository::new(db_conn)),
                Arc::new(RoleRepository::new(db_conn)),
                PasswordService::from_env(),
                events,
            ),
        }
    }
}
