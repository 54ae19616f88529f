pub mod game_sessions;
pub mod health;
pub mod leaderboard;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::cors::cors_layer;
use crate::AppState;

pub use game_sessions::create_game_session;
pub use health::{api_root, health_check, root_status};
pub use leaderboard::{add_leaderboard_entry, get_leaderboard, get_top_scores};
pub use users::create_user;

/// Build the application router with CORS and request tracing applied
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
        .route("/api/", get(api_root))
        .route("/api/users", post(create_user))
        .route("/api/game-sessions", post(create_game_session))
        .route(
            "/api/leaderboard",
            post(add_leaderboard_entry).get(get_leaderboard),
        )
        .route("/api/top-scores", get(get_top_scores))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
