use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::config::IMPROVEMENT_WINDOW_DAYS;
use crate::domain::Submission;

/// Distinct accepted problems in [start, end)
fn distinct_solved_between(
  submissions: &[&Submission],
  start: DateTime<Utc>,
  end: DateTime<Utc>,
) -> i64 {
  submissions
    .iter()
    .filter(|s| s.is_accepted() && s.created_at >= start && s.created_at < end)
    .map(|s| s.problem_identifier.as_str())
    .collect::<HashSet<_>>()
    .len() as i64
}

/// This week's distinct solves minus last week's. May be negative.
pub fn weekly_improvement(submissions: &[&Submission], now: DateTime<Utc>) -> i64 {
  let window = Duration::days(IMPROVEMENT_WINDOW_DAYS);
  let this_week_start = now - window;
  let last_week_start = this_week_start - window;

  let this_week = distinct_solved_between(submissions, this_week_start, now);
  let last_week = distinct_solved_between(submissions, last_week_start, this_week_start);
  this_week - last_week
}
