pub mod game_session;
pub mod leaderboard;
pub mod user;

pub use game_session::GameSession;
pub use leaderboard::{LeaderboardEntry, TopScore};
pub use user::User;
