use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::{MSG_API_RUNNING, MSG_GREETING};
use crate::AppState;

/// Liveness payload for `GET /`
pub async fn root_status() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": MSG_API_RUNNING,
    }))
}

/// Greeting for `GET /api/`
pub async fn api_root() -> Json<Value> {
    Json(json!({ "message": MSG_GREETING }))
}

/// Health check endpoint
///
/// Returns the health status of the server and database connection.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.store.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            "disconnected"
        }
    };

    Json(json!({
        "status": if db_status == "connected" { "healthy" } else { "unhealthy" },
        "database": db_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
