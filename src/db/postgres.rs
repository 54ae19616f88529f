use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row};

use super::{GameStore, UpsertedUser};
use crate::error::Result;
use crate::models::{GameSession, LeaderboardEntry, TopScore, User};

/// PostgreSQL-backed store over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl GameStore for PgStore {
    async fn upsert_user(&self, candidate: &User) -> Result<UpsertedUser> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict. Relies on the unique constraint on device_fingerprint.
        // Counters are nullable in the store and may be written externally.
        let row = sqlx::query(
            r#"
            INSERT INTO users (
                id, device_fingerprint, created_at, last_seen,
                total_games_played, total_play_time, high_score, total_score,
                best_combo, best_perfect_streak, achievements_unlocked,
                current_level, experience_points, total_targets_hit, total_targets_missed
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (device_fingerprint)
                DO UPDATE SET device_fingerprint = EXCLUDED.device_fingerprint
            RETURNING id, device_fingerprint, created_at, last_seen,
                COALESCE(total_games_played, 0) AS total_games_played,
                COALESCE(total_play_time, 0) AS total_play_time,
                COALESCE(high_score, 0) AS high_score,
                COALESCE(total_score, 0) AS total_score,
                COALESCE(best_combo, 0) AS best_combo,
                COALESCE(best_perfect_streak, 0) AS best_perfect_streak,
                COALESCE(achievements_unlocked, ARRAY[]::TEXT[]) AS achievements_unlocked,
                COALESCE(current_level, 1) AS current_level,
                COALESCE(experience_points, 0) AS experience_points,
                COALESCE(total_targets_hit, 0) AS total_targets_hit,
                COALESCE(total_targets_missed, 0) AS total_targets_missed,
                (xmax = 0) AS inserted
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.device_fingerprint)
        .bind(candidate.created_at)
        .bind(candidate.last_seen)
        .bind(candidate.total_games_played)
        .bind(candidate.total_play_time)
        .bind(candidate.high_score)
        .bind(candidate.total_score)
        .bind(candidate.best_combo)
        .bind(candidate.best_perfect_streak)
        .bind(candidate.achievements_unlocked.as_slice())
        .bind(candidate.current_level)
        .bind(candidate.experience_points)
        .bind(candidate.total_targets_hit)
        .bind(candidate.total_targets_missed)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpsertedUser {
            user: User::from_row(&row)?,
            created: row.try_get("inserted")?,
        })
    }

    async fn insert_game_session(&self, session: &GameSession) -> Result<GameSession> {
        // game_speed is DECIMAL in the store; decode it as float8
        let stored = sqlx::query_as::<_, GameSession>(
            r#"
            INSERT INTO game_sessions (
                id, user_id, device_fingerprint, start_time, end_time, score,
                final_combo, perfect_streak, achievements_unlocked, play_duration,
                targets_hit, targets_missed, game_speed, game_mode, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, user_id, device_fingerprint, start_time, end_time, score,
                COALESCE(final_combo, 0) AS final_combo,
                COALESCE(perfect_streak, 0) AS perfect_streak,
                COALESCE(achievements_unlocked, ARRAY[]::TEXT[]) AS achievements_unlocked,
                play_duration,
                COALESCE(targets_hit, 0) AS targets_hit,
                COALESCE(targets_missed, 0) AS targets_missed,
                COALESCE(game_speed, 1.0)::float8 AS game_speed,
                COALESCE(game_mode, 'classic') AS game_mode,
                created_at
            "#,
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(&session.device_fingerprint)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.score)
        .bind(session.final_combo)
        .bind(session.perfect_streak)
        .bind(session.achievements_unlocked.as_slice())
        .bind(session.play_duration)
        .bind(session.targets_hit)
        .bind(session.targets_missed)
        .bind(session.game_speed)
        .bind(&session.game_mode)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn insert_leaderboard_entry(
        &self,
        entry: &LeaderboardEntry,
    ) -> Result<LeaderboardEntry> {
        let stored = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO global_leaderboard (
                id, user_id, device_fingerprint, score, combo, perfect_streak,
                achieved_at, session_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, device_fingerprint, score,
                COALESCE(combo, 0) AS combo,
                COALESCE(perfect_streak, 0) AS perfect_streak,
                achieved_at, session_id, created_at
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(&entry.device_fingerprint)
        .bind(entry.score)
        .bind(entry.combo)
        .bind(entry.perfect_streak)
        .bind(entry.achieved_at)
        .bind(entry.session_id)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn leaderboard(&self, limit: i64) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT id, user_id, device_fingerprint, score,
                COALESCE(combo, 0) AS combo,
                COALESCE(perfect_streak, 0) AS perfect_streak,
                achieved_at, session_id, created_at
            FROM global_leaderboard
            ORDER BY score DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn top_scores(&self, limit: i64) -> Result<Vec<TopScore>> {
        let rows = sqlx::query_as::<_, TopScore>(
            r#"
            SELECT user_id, device_fingerprint, score,
                COALESCE(combo, 0) AS combo,
                COALESCE(perfect_streak, 0) AS perfect_streak,
                achieved_at
            FROM top_scores
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool...");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
