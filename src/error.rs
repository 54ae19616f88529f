use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
///
/// Every store failure is a backend failure: the caller gets a 500 carrying
/// the raw error text, whatever the underlying cause.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Database(ref e) = self;
        tracing::error!("Database error: {:?}", e);

        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
