use crate::config::database::Database;
use crate::handler::health_handler;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<Database>> {
    Router::<Arc<Database>>::new().route("/health", get(health_handler::health_check))
}
