//! TUI screen implementations.

pub mod analytics;
pub mod athletes;
pub mod auth;
pub mod dashboard;
pub mod leaderboard;
pub mod profiles;

pub use analytics::draw_analytics;
pub use athletes::{AthletesState, draw_athletes};
pub use auth::{AuthState, draw_auth};
pub use dashboard::{DashboardState, draw_dashboard};
pub use leaderboard::draw_leaderboard;
pub use profiles::draw_profiles;
