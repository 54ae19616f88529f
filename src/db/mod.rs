pub mod pool;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{GameSession, LeaderboardEntry, TopScore, User};

pub use pool::create_pool;
pub use postgres::PgStore;

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Store = Arc<dyn GameStore>;

/// Outcome of the identity upsert
#[derive(Debug, Clone)]
pub struct UpsertedUser {
    /// The persisted row, never the in-memory candidate
    pub user: User,
    /// True when this call inserted the row
    pub created: bool,
}

/// Persistence operations behind the HTTP API.
///
/// Each method is a single round trip to the store.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert `candidate` unless a user with the same device fingerprint
    /// exists, atomically, and return whichever row is now stored.
    async fn upsert_user(&self, candidate: &User) -> Result<UpsertedUser>;

    async fn insert_game_session(&self, session: &GameSession) -> Result<GameSession>;

    async fn insert_leaderboard_entry(&self, entry: &LeaderboardEntry)
        -> Result<LeaderboardEntry>;

    /// Up to `limit` entries, highest score first
    async fn leaderboard(&self, limit: i64) -> Result<Vec<LeaderboardEntry>>;

    /// Up to `limit` rows of the `top_scores` view
    async fn top_scores(&self, limit: i64) -> Result<Vec<TopScore>>;

    /// Connectivity check for the health endpoint
    async fn ping(&self) -> Result<()>;

    /// Release connections; called once on shutdown
    async fn close(&self);
}
