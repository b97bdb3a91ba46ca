pub mod refresh_token_repository;
pub mod role_repository;
pub mod user_repository;
