//! Readiness report assembly.
//!
//! Loads a user's submissions and the problems they touched through a
//! `ScoreSource`, then hands them to the pure scoring functions. Handlers and
//! the CLI go through here so "user not found" is decided in one place.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::db;
use crate::domain::{Problem, Submission, User};
use crate::scoring::{compute_report, ScoreReport};

/// Read access to the records a report needs
pub trait ScoreSource {
    fn find_user(&self, uid: &str) -> rusqlite::Result<Option<User>>;
    fn search_user(&self, name: &str) -> rusqlite::Result<Option<User>>;
    fn all_users(&self) -> rusqlite::Result<Vec<User>>;
    fn submissions_for(&self, uid: &str) -> rusqlite::Result<Vec<Submission>>;
    fn problems_for(&self, identifiers: &[String]) -> rusqlite::Result<Vec<Problem>>;
}

impl ScoreSource for Connection {
    fn find_user(&self, uid: &str) -> rusqlite::Result<Option<User>> {
        db::get_user_by_uid(self, uid)
    }

    fn search_user(&self, name: &str) -> rusqlite::Result<Option<User>> {
        db::find_user_by_name(self, name)
    }

    fn all_users(&self) -> rusqlite::Result<Vec<User>> {
        db::get_all_users(self)
    }

    fn submissions_for(&self, uid: &str) -> rusqlite::Result<Vec<Submission>> {
        db::get_submissions_for_user(self, uid)
    }

    fn problems_for(&self, identifiers: &[String]) -> rusqlite::Result<Vec<Problem>> {
        db::get_problems_by_identifiers(self, identifiers)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A user's report together with who it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub uid: String,
    pub full_name: String,
    pub report: ScoreReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub uid: String,
    pub full_name: String,
    pub total: i64,
    pub solved_count: i64,
    pub streak: i64,
}

fn score_for_user<S: ScoreSource + ?Sized>(
    source: &S,
    user: User,
    now: DateTime<Utc>,
) -> Result<UserScore, ReportError> {
    let submissions = source.submissions_for(&user.uid)?;

    // Only solved identifiers need a difficulty lookup
    let solved: Vec<String> = submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(|s| s.problem_identifier.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let problems = source.problems_for(&solved)?;

    let report = compute_report(&submissions, &problems, now);
    tracing::debug!(
        uid = %user.uid,
        submissions = submissions.len(),
        solved = solved.len(),
        resolved = problems.len(),
        total = report.total,
        "Computed readiness report"
    );

    Ok(UserScore {
        uid: user.uid,
        full_name: user.full_name,
        report,
    })
}

/// Report for the user with this uid.
///
/// A known user with no submissions gets the zero report.
pub fn user_report<S: ScoreSource + ?Sized>(
    source: &S,
    uid: &str,
    now: DateTime<Utc>,
) -> Result<UserScore, ReportError> {
    let user = source
        .find_user(uid)?
        .ok_or_else(|| ReportError::UserNotFound(uid.to_string()))?;
    score_for_user(source, user, now)
}

/// Resolve `query` as a uid first, then as part of a full name
pub fn resolve_user<S: ScoreSource + ?Sized>(source: &S, query: &str) -> Result<User, ReportError> {
    if let Some(user) = source.find_user(query)? {
        return Ok(user);
    }
    source
        .search_user(query)?
        .ok_or_else(|| ReportError::UserNotFound(query.to_string()))
}

/// Rank every user by total score, highest first, ties by uid
pub fn leaderboard<S: ScoreSource + ?Sized>(
    source: &S,
    now: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<LeaderboardEntry>, ReportError> {
    let mut scores = source
        .all_users()?
        .into_iter()
        .map(|user| score_for_user(source, user, now))
        .collect::<Result<Vec<_>, _>>()?;

    scores.sort_by(|a, b| b.report.total.cmp(&a.report.total).then_with(|| a.uid.cmp(&b.uid)));

    Ok(scores
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, score)| LeaderboardEntry {
            rank: i + 1,
            uid: score.uid,
            full_name: score.full_name,
            total: score.report.total,
            solved_count: score.report.solved_count,
            streak: score.report.streak,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Verdict};
    use chrono::{Duration, TimeZone};

    /// In-memory source so the service can be tested without SQLite
    #[derive(Default)]
    struct MemorySource {
        users: Vec<User>,
        problems: Vec<Problem>,
        submissions: Vec<Submission>,
    }

    impl ScoreSource for MemorySource {
        fn find_user(&self, uid: &str) -> rusqlite::Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.uid == uid).cloned())
        }

        fn search_user(&self, name: &str) -> rusqlite::Result<Option<User>> {
            let needle = name.to_lowercase();
            Ok(self
                .users
                .iter()
                .find(|u| u.full_name.to_lowercase().contains(&needle))
                .cloned())
        }

        fn all_users(&self) -> rusqlite::Result<Vec<User>> {
            Ok(self.users.clone())
        }

        fn submissions_for(&self, uid: &str) -> rusqlite::Result<Vec<Submission>> {
            Ok(self.submissions.iter().filter(|s| s.uid == uid).cloned().collect())
        }

        fn problems_for(&self, identifiers: &[String]) -> rusqlite::Result<Vec<Problem>> {
            Ok(self
                .problems
                .iter()
                .filter(|p| identifiers.iter().any(|id| *id == p.id || *id == p.slug))
                .cloned()
                .collect())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn source() -> MemorySource {
        let at = |days: i64| now() - Duration::days(days) - Duration::hours(1);
        MemorySource {
            users: vec![
                User::new("u1", "Rohan Mehta"),
                User::new("u2", "Priya Sharma"),
                User::new("u3", "Idle Person"),
            ],
            problems: vec![
                Problem::new("p1", "two-sum", Difficulty::Easy),
                Problem::new("p2", "lru-cache", Difficulty::Hard),
            ],
            submissions: vec![
                Submission::new("u1", "two-sum", Verdict::Accepted, at(30)),
                Submission::new("u2", "p2", Verdict::Accepted, at(30)),
                Submission::new("u2", "p2", Verdict::WrongAnswer, at(31)),
            ],
        }
    }

    #[test]
    fn test_user_report_for_known_user() {
        let score = user_report(&source(), "u1", now()).unwrap();
        assert_eq!(score.full_name, "Rohan Mehta");
        assert_eq!(score.report.easy_count, 1);
        assert_eq!(score.report.accuracy, 100);
        assert_eq!(score.report.total, 20 + 100);
    }

    #[test]
    fn test_user_report_unknown_user() {
        let err = user_report(&source(), "ghost", now()).unwrap_err();
        assert!(matches!(err, ReportError::UserNotFound(ref uid) if uid == "ghost"));
    }

    #[test]
    fn test_user_without_submissions_gets_zero_report() {
        let score = user_report(&source(), "u3", now()).unwrap();
        assert_eq!(score.report, ScoreReport::default());
    }

    #[test]
    fn test_resolve_user_by_uid_then_name() {
        let src = source();
        assert_eq!(resolve_user(&src, "u2").unwrap().full_name, "Priya Sharma");
        assert_eq!(resolve_user(&src, "rohan").unwrap().uid, "u1");
        assert!(matches!(
            resolve_user(&src, "nobody"),
            Err(ReportError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_leaderboard_order_and_ranks() {
        let board = leaderboard(&source(), now(), 10).unwrap();
        let uids: Vec<&str> = board.iter().map(|e| e.uid.as_str()).collect();
        // u2: 100 + 50 = 150, u1: 20 + 100 = 120, u3: 0
        assert_eq!(uids, vec!["u2", "u1", "u3"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].total, 150);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_leaderboard_ties_break_by_uid() {
        let mut src = source();
        src.users.push(User::new("u0", "Also Idle"));
        let board = leaderboard(&src, now(), 10).unwrap();
        let tail: Vec<&str> = board[2..].iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(tail, vec!["u0", "u3"]);
    }

    #[test]
    fn test_leaderboard_limit() {
        let board = leaderboard(&source(), now(), 1).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].uid, "u2");
    }

    #[test]
    fn test_sqlite_source() {
        let env = crate::testing::TestEnv::new().unwrap();
        let src = source();
        for user in &src.users {
            db::insert_user(&env.conn, user).unwrap();
        }
        for problem in &src.problems {
            db::insert_problem(&env.conn, problem).unwrap();
        }
        for submission in &src.submissions {
            db::insert_submission(&env.conn, submission).unwrap();
        }

        let from_db = user_report(&env.conn, "u2", now()).unwrap();
        let from_memory = user_report(&src, "u2", now()).unwrap();
        assert_eq!(from_db, from_memory);
    }
}
