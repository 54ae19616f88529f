use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ranked score claim on the global leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub device_fingerprint: String,
    pub score: i32,
    #[serde(default)]
    pub combo: i32,
    #[serde(default)]
    pub perfect_streak: i32,
    pub achieved_at: DateTime<Utc>,
    /// Session the score came from. Not checked against `game_sessions`.
    pub session_id: Uuid,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Row of the `top_scores` view.
///
/// The view is maintained outside this service; decoding into a fixed shape
/// keeps schema drift in the view from leaking to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TopScore {
    pub user_id: Uuid,
    pub device_fingerprint: String,
    pub score: i32,
    pub combo: i32,
    pub perfect_streak: i32,
    pub achieved_at: DateTime<Utc>,
}
