//! Pulse Game Backend Library
//!
//! User profiles, game sessions and the global leaderboard over PostgreSQL,
//! served through a small axum API. Exported for the binary and for tests.

pub mod config;
pub mod constants;
pub mod cors;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

pub use config::Config;
pub use db::{create_pool, GameStore, PgStore, Store};
pub use error::{AppError, Result};
pub use routes::router;
pub use server::serve;

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Arc<dyn GameStore>, config: Config) -> Self {
        Self { store, config }
    }
}
