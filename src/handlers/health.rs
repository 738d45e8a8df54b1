use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::db::{self, try_lock, DbPool, LogOnError};

/// GET /api/health
pub async fn health(State(pool): State<DbPool>) -> impl IntoResponse {
  let database_up = match try_lock(&pool) {
    Ok(conn) => db::ping(&conn).log_warn("Health check query failed").is_some(),
    Err(_) => false,
  };

  if database_up {
    (
      StatusCode::OK,
      Json(serde_json::json!({ "status": "ok", "database": "up" })),
    )
  } else {
    (
      StatusCode::SERVICE_UNAVAILABLE,
      Json(serde_json::json!({ "status": "degraded", "database": "down" })),
    )
  }
}
