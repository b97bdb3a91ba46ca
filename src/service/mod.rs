pub mod admin_service;
pub mod auth_service;
pub mod bootstrap_service;
pub mod password_service;
pub mod refresh_token_service;
pub mod token_service;
pub mod user_service;
