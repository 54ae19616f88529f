use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::STARTING_LEVEL;

/// Player profile, keyed by the client's device fingerprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// Opaque client-generated identity key (not a verified credential)
    pub device_fingerprint: String,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub total_games_played: i32,
    /// Cumulative play time in seconds
    pub total_play_time: i32,
    pub high_score: i32,
    pub total_score: i64,
    pub best_combo: i32,
    pub best_perfect_streak: i32,
    pub achievements_unlocked: Vec<String>,
    pub current_level: i32,
    pub experience_points: i32,
    pub total_targets_hit: i32,
    pub total_targets_missed: i32,
}

impl User {
    /// Build a fresh profile for a fingerprint with zeroed counters.
    ///
    /// The fingerprint is taken as-is; the empty string is a valid key.
    pub fn new(device_fingerprint: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            device_fingerprint: device_fingerprint.into(),
            created_at: now,
            last_seen: now,
            total_games_played: 0,
            total_play_time: 0,
            high_score: 0,
            total_score: 0,
            best_combo: 0,
            best_perfect_streak: 0,
            achievements_unlocked: Vec::new(),
            current_level: STARTING_LEVEL,
            experience_points: 0,
            total_targets_hit: 0,
            total_targets_missed: 0,
        }
    }
}
