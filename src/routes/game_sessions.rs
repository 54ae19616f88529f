use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::GameSession;
use crate::AppState;

/// Record a finished game session
///
/// The session is stored exactly as submitted. No fields are cross-checked:
/// scores, durations and timestamps are taken on trust from the client.
pub async fn create_game_session(
    State(state): State<AppState>,
    Json(session): Json<GameSession>,
) -> Result<Json<GameSession>> {
    let stored = state.store.insert_game_session(&session).await?;

    tracing::info!(
        "Game session {} recorded for user {}: score {}",
        stored.id,
        stored.user_id,
        stored.score
    );

    Ok(Json(stored))
}
