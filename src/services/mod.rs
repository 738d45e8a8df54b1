//! Application services.
//!
//! Logic shared by the HTTP handlers and the CLI.

pub mod import;
pub mod report;

pub use import::{import_fixture, Fixture, ImportError, ImportSummary};
pub use report::{
    leaderboard, resolve_user, user_report, LeaderboardEntry, ReportError, ScoreSource, UserScore,
};
