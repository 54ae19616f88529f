use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_GAME_MODE, DEFAULT_GAME_SPEED};

/// A completed play, submitted by the client after the game ends.
///
/// The client picks every value; omitted optional fields fall back to the
/// defaults below. Nothing is cross-checked server side (a session may end
/// before it starts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameSession {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub device_fingerprint: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub score: i32,
    #[serde(default)]
    pub final_combo: i32,
    #[serde(default)]
    pub perfect_streak: i32,
    #[serde(default)]
    pub achievements_unlocked: Vec<String>,
    /// Play time in seconds
    pub play_duration: i32,
    #[serde(default)]
    pub targets_hit: i32,
    #[serde(default)]
    pub targets_missed: i32,
    #[serde(default = "default_game_speed")]
    pub game_speed: f64,
    #[serde(default = "default_game_mode")]
    pub game_mode: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_game_speed() -> f64 {
    DEFAULT_GAME_SPEED
}

fn default_game_mode() -> String {
    DEFAULT_GAME_MODE.to_string()
}
