use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("{0}")]
    SomethingWentWrong(String),
}

impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        DbError::SomethingWentWrong(error.to_string())
    }
}

impl IntoResponse for DbError {
    fn into_response(self) -> Response {
        ErrorResponse::send("Database error".to_string())
            .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response()
    }
}
