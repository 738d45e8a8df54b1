//! Command-line report and import flows.
//!
//! `main` only maps these results to exit codes, so the text the CLI prints
//! is built (and tested) here.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::fmt::Write;
use std::path::Path;

use crate::services::{self, Fixture, ImportError, ImportSummary, ReportError, ScoreSource, UserScore};

/// Resolve `query` to a user and render their breakdown
pub fn report_for<S: ScoreSource + ?Sized>(
  source: &S,
  query: &str,
  now: DateTime<Utc>,
) -> Result<String, ReportError> {
  let user = services::resolve_user(source, query)?;
  let score = services::user_report(source, &user.uid, now)?;
  Ok(format_report(&score))
}

pub fn format_report(score: &UserScore) -> String {
  let r = &score.report;
  let mut out = String::new();
  // Writing to a String cannot fail
  let _ = writeln!(out, "{} ({})", score.full_name, score.uid);
  let _ = writeln!(
    out,
    "  Solved:       {} (easy {}, medium {}, hard {})",
    r.solved_count, r.easy_count, r.medium_count, r.hard_count
  );
  let _ = writeln!(out, "  Accuracy:     {}%", r.accuracy);
  let _ = writeln!(out, "  Streak:       {} day{}", r.streak, if r.streak == 1 { "" } else { "s" });
  let _ = writeln!(out, "  Improvement:  {:+}", r.improvement);
  let _ = writeln!(out);
  let _ = writeln!(out, "  Difficulty:   {}", r.diff_score);
  let _ = writeln!(out, "  Accuracy:     {}", r.accuracy);
  let _ = writeln!(out, "  Consistency:  {}", r.cons_score);
  let _ = writeln!(out, "  Improvement:  {}", r.imp_score);
  let _ = writeln!(out, "  Total:        {}", r.total);
  out
}

/// Load a fixture file into the database
pub fn import_file(conn: &mut Connection, path: &Path) -> Result<ImportSummary, ImportError> {
  let fixture = Fixture::from_path(path)?;
  services::import_fixture(conn, &fixture)
}

pub fn format_import_summary(summary: &ImportSummary) -> String {
  format!(
    "Imported {} users, {} problems, {} submissions",
    summary.users, summary.problems, summary.submissions
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::TestEnv;
  use chrono::{Duration, TimeZone};

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
  }

  fn write_fixture(env: &TestEnv) -> std::path::PathBuf {
    let yesterday = (now() - Duration::days(1)).to_rfc3339();
    let fixture = format!(
      r#"{{
        "users": [{{"uid": "u1", "fullName": "Rohan Mehta"}}],
        "problems": [{{"id": "p1", "slug": "two-sum", "difficulty": "Easy"}}],
        "submissions": [
          {{"uid": "u1", "problemIdentifier": "two-sum", "verdict": "Accepted", "createdAt": "{0}"}},
          {{"uid": "u1", "problemIdentifier": "two-sum", "verdict": "Wrong Answer", "createdAt": "{0}"}}
        ]
      }}"#,
      yesterday
    );
    let path = env.path().join("fixture.json");
    std::fs::write(&path, fixture).unwrap();
    path
  }

  #[test]
  fn test_import_then_report_by_name() {
    let mut env = TestEnv::new().unwrap();
    let path = write_fixture(&env);

    let summary = import_file(&mut env.conn, &path).unwrap();
    assert_eq!(
      format_import_summary(&summary),
      "Imported 1 users, 1 problems, 2 submissions"
    );

    let text = report_for(&env.conn, "rohan", now()).unwrap();
    let expected = "\
Rohan Mehta (u1)
  Solved:       1 (easy 1, medium 0, hard 0)
  Accuracy:     50%
  Streak:       1 day
  Improvement:  +1

  Difficulty:   20
  Accuracy:     50
  Consistency:  10
  Improvement:  15
  Total:        95
";
    assert_eq!(text, expected);
  }

  #[test]
  fn test_report_unknown_user() {
    let env = TestEnv::new().unwrap();
    let err = report_for(&env.conn, "nobody", now()).unwrap_err();
    assert!(matches!(err, ReportError::UserNotFound(_)));
    assert_eq!(err.to_string(), "User not found: nobody");
  }

  #[test]
  fn test_report_wildcard_query_is_not_found() {
    let mut env = TestEnv::new().unwrap();
    let path = write_fixture(&env);
    import_file(&mut env.conn, &path).unwrap();

    assert!(matches!(
      report_for(&env.conn, "_", now()),
      Err(ReportError::UserNotFound(_))
    ));
  }

  #[test]
  fn test_format_report_plural_days_and_decline() {
    let score = UserScore {
      uid: "u2".to_string(),
      full_name: "Priya Sharma".to_string(),
      report: crate::scoring::ScoreReport {
        streak: 3,
        improvement: -2,
        ..Default::default()
      },
    };
    let text = format_report(&score);
    assert!(text.contains("  Streak:       3 days\n"));
    assert!(text.contains("  Improvement:  -2\n"));
    assert!(text.contains("  Improvement:  0\n"));
  }

  #[test]
  fn test_import_missing_file() {
    let mut env = TestEnv::new().unwrap();
    let missing = env.path().join("missing.json");
    assert!(matches!(
      import_file(&mut env.conn, &missing),
      Err(ImportError::Io(_))
    ));
  }
}
