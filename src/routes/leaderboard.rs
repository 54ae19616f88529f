use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::DEFAULT_LEADERBOARD_LIMIT;
use crate::error::Result;
use crate::models::{LeaderboardEntry, TopScore};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LEADERBOARD_LIMIT
}

/// Submit a score to the global leaderboard
pub async fn add_leaderboard_entry(
    State(state): State<AppState>,
    Json(entry): Json<LeaderboardEntry>,
) -> Result<Json<LeaderboardEntry>> {
    let stored = state.store.insert_leaderboard_entry(&entry).await?;

    tracing::info!(
        "Leaderboard entry {} added for user {}: score {}",
        stored.id,
        stored.user_id,
        stored.score
    );

    Ok(Json(stored))
}

/// Highest scores first, up to `limit` (default 100, no upper bound)
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let entries = state.store.leaderboard(params.limit).await?;
    Ok(Json(entries))
}

/// Rows of the externally maintained `top_scores` view
pub async fn get_top_scores(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<TopScore>>> {
    let rows = state.store.top_scores(params.limit).await?;
    Ok(Json(rows))
}
