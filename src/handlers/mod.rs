pub mod health;
pub mod score;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::db::DbPool;

pub use health::health;
pub use score::{leaderboard, user_score};

/// Build the application router
pub fn router(pool: DbPool) -> Router {
  Router::new()
    .route("/api/health", get(health))
    .route("/api/users/{uid}/score", get(user_score))
    .route("/api/leaderboard", get(leaderboard))
    .layer(TraceLayer::new_for_http())
    .with_state(pool)
}
