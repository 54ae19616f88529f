/// Default number of rows returned by the leaderboard and top-scores queries
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 100;

/// How long browsers may cache a CORS preflight response (1 hour)
pub const CORS_MAX_AGE_SECS: u64 = 3600;

/// Origins allowed when `ALLOWED_ORIGINS` is not set.
/// A `*` label matches any single subdomain label (preview deployments).
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "https://*.vercel.app",
    "https://*.netlify.app",
];

/// Level every new player starts at
pub const STARTING_LEVEL: i32 = 1;

/// Game mode recorded when a session does not name one
pub const DEFAULT_GAME_MODE: &str = "classic";

/// Game speed multiplier recorded when a session does not name one
pub const DEFAULT_GAME_SPEED: f64 = 1.0;

// =============================================================================
// Response Messages
// =============================================================================

/// Liveness payload message for `GET /`
pub const MSG_API_RUNNING: &str = "API is running";

/// Greeting for `GET /api/`
pub const MSG_GREETING: &str = "Hello World";
