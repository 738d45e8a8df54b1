use axum::{
  extract::{Path, Query, State},
  Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::config::{DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};
use crate::db::{try_lock, DbPool};
use crate::error::ApiError;
use crate::services::{self, LeaderboardEntry, UserScore};

/// GET /api/users/{uid}/score
pub async fn user_score(
  State(pool): State<DbPool>,
  Path(uid): Path<String>,
) -> Result<Json<UserScore>, ApiError> {
  let conn = try_lock(&pool)?;
  let score = services::user_report(&*conn, &uid, Utc::now())?;
  Ok(Json(score))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
  pub limit: Option<usize>,
}

/// GET /api/leaderboard?limit=N
pub async fn leaderboard(
  State(pool): State<DbPool>,
  Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
  let limit = match query.limit {
    None => DEFAULT_LEADERBOARD_LIMIT,
    Some(0) => return Err(ApiError::BadRequest("limit must be at least 1".to_string())),
    Some(n) => n.min(MAX_LEADERBOARD_LIMIT),
  };

  let conn = try_lock(&pool)?;
  let board = services::leaderboard(&*conn, Utc::now(), limit)?;
  Ok(Json(board))
}
