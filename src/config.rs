//! Application configuration.
//!
//! Runtime settings (database location, bind address) are resolved here,
//! alongside the scoring weights used by the readiness report.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Extract the database path from config.toml contents, if one is set
fn database_path_from_toml(contents: &str) -> Option<PathBuf> {
    let config = toml::from_str::<AppConfig>(contents).ok()?;
    config.database?.path.map(PathBuf::from)
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Some(path) = database_path_from_toml(&contents) {
            tracing::info!("Using database from config.toml: {}", path.display());
            return path;
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port (override with PORT)
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server port from the PORT env var, falling back to the default
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, server_port())
}

// ==================== Scoring Weights ====================

/// Points per distinct solved Easy problem
pub const EASY_POINTS: i64 = 20;

/// Points per distinct solved Medium problem
pub const MEDIUM_POINTS: i64 = 50;

/// Points per distinct solved Hard problem
pub const HARD_POINTS: i64 = 100;

/// Points per day of the current activity streak
pub const STREAK_DAY_POINTS: i64 = 10;

/// Points per extra problem solved this week compared to last week
pub const IMPROVEMENT_POINTS: i64 = 15;

/// Length of each improvement comparison window
pub const IMPROVEMENT_WINDOW_DAYS: i64 = 7;

// ==================== Query Limits ====================

/// Leaderboard size when no limit is requested
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Upper bound on a requested leaderboard size
pub const MAX_LEADERBOARD_LIMIT: usize = 100;
