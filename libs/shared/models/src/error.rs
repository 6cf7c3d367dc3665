use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("Error: {}: {}", status, self);

        // Storage details stay in the log; clients only see the category.
        let message = match &self {
            AppError::NotFound(msg) => msg.as_str(),
            AppError::Database(_) => "Database error",
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
