//! Readiness score computation.
//!
//! Everything here is a pure function of a user's submissions, the problems
//! they reference and the current time. Data loading lives in `services`.

pub mod improvement;
pub mod index;
pub mod streak;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{
  EASY_POINTS, HARD_POINTS, IMPROVEMENT_POINTS, MEDIUM_POINTS, STREAK_DAY_POINTS,
};
use crate::domain::{Difficulty, Problem, Submission};

pub use improvement::weekly_improvement;
pub use index::ProblemIndex;
pub use streak::current_streak;

/// Score breakdown for a single user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
  pub easy_count: i64,
  pub medium_count: i64,
  pub hard_count: i64,
  /// Distinct accepted identifiers, including ones with no known problem
  pub solved_count: i64,
  pub accuracy: i64,
  pub streak: i64,
  /// Week-over-week change in distinct solves (may be negative)
  pub improvement: i64,
  pub diff_score: i64,
  pub cons_score: i64,
  pub imp_score: i64,
  pub total: i64,
}

/// Percentage of accepted submissions, rounded half away from zero
pub fn accuracy_percent(accepted: usize, total: usize) -> i64 {
  if total == 0 {
    return 0;
  }
  (accepted as f64 / total as f64 * 100.0).round() as i64
}

pub fn difficulty_score(easy: i64, medium: i64, hard: i64) -> i64 {
  easy * EASY_POINTS + medium * MEDIUM_POINTS + hard * HARD_POINTS
}

/// Compute the readiness report for one user's submission history.
///
/// `submissions` may arrive in any order. `problems` only needs to contain
/// the problems the submissions reference; solved identifiers that match
/// neither an id nor a slug are left out of the difficulty buckets.
pub fn compute_report(
  submissions: &[Submission],
  problems: &[Problem],
  now: DateTime<Utc>,
) -> ScoreReport {
  if submissions.is_empty() {
    return ScoreReport::default();
  }

  let mut history: Vec<&Submission> = submissions.iter().collect();
  history.sort_by(|a, b| b.created_at.cmp(&a.created_at));

  let accepted: Vec<&Submission> = history.iter().copied().filter(|s| s.is_accepted()).collect();
  let solved: HashSet<&str> = accepted
    .iter()
    .map(|s| s.problem_identifier.as_str())
    .collect();

  let index = ProblemIndex::build(problems);
  let (mut easy_count, mut medium_count, mut hard_count) = (0, 0, 0);
  for identifier in &solved {
    match index.difficulty_of(identifier) {
      Some(Difficulty::Easy) => easy_count += 1,
      Some(Difficulty::Medium) => medium_count += 1,
      Some(Difficulty::Hard) => hard_count += 1,
      None => {}
    }
  }

  let accuracy = accuracy_percent(accepted.len(), history.len());
  let streak = current_streak(history.iter().map(|s| s.created_at), now);
  let improvement = weekly_improvement(&history, now);

  let diff_score = difficulty_score(easy_count, medium_count, hard_count);
  let cons_score = streak * STREAK_DAY_POINTS;
  let imp_score = (improvement * IMPROVEMENT_POINTS).max(0);

  ScoreReport {
    easy_count,
    medium_count,
    hard_count,
    solved_count: solved.len() as i64,
    accuracy,
    streak,
    improvement,
    diff_score,
    cons_score,
    imp_score,
    total: diff_score + accuracy + cons_score + imp_score,
  }
}
