use crate::config::database::{Database, DatabaseTrait};
use crate::response::app_response::SuccessResponse;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub response_time_ms: Option<u128>,
}

pub async fn health_check(State(db): State<Arc<Database>>) -> impl IntoResponse {
    let start = Instant::now();
    let database = match sqlx::query("SELECT 1").execute(db.get_pool()).await {
        Ok(_) => DatabaseHealth {
            status: "up",
            response_time_ms: Some(start.elapsed().as_millis()),
        },
        Err(_) => DatabaseHealth {
            status: "down",
            response_time_ms: None,
        },
    };

    let status = if database.status == "up" { "ok" } else { "degraded" };

    SuccessResponse::send(HealthStatus {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
    })
}
