use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::User;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserParams {
    pub device_fingerprint: String,
}

/// Get or create the user for a device fingerprint
///
/// Returns the stored profile when the fingerprint is known, otherwise stores
/// a fresh profile with zeroed counters and returns the persisted row.
/// Lookup and insert happen in one atomic statement, so concurrent first
/// calls from the same device still yield a single user.
pub async fn create_user(
    State(state): State<AppState>,
    Query(params): Query<CreateUserParams>,
) -> Result<Json<User>> {
    let candidate = User::new(params.device_fingerprint);
    let outcome = state.store.upsert_user(&candidate).await?;

    if outcome.created {
        tracing::info!("New user created: {}", outcome.user.id);
    } else {
        tracing::debug!("Existing user returned: {}", outcome.user.id);
    }

    Ok(Json(outcome.user))
}
