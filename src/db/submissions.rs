use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result};

use crate::domain::Submission;

pub fn insert_submission(conn: &Connection, submission: &Submission) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO submissions (uid, problem_identifier, verdict, created_at)
    VALUES (?1, ?2, ?3, ?4)
    "#,
    params![
      submission.uid,
      submission.problem_identifier,
      submission.verdict,
      submission.created_at.to_rfc3339(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

/// All submissions for a user, newest first
pub fn get_submissions_for_user(conn: &Connection, uid: &str) -> Result<Vec<Submission>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT uid, problem_identifier, verdict, created_at
    FROM submissions
    WHERE uid = ?1
    ORDER BY created_at DESC, id DESC
    "#,
  )?;

  let submissions = stmt
    .query_map(params![uid], row_to_submission)?
    .collect::<Result<Vec<_>>>()?;
  Ok(submissions)
}

pub fn get_submission_count(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))
}

fn row_to_submission(row: &rusqlite::Row) -> Result<Submission> {
  let created_at_str: String = row.get(3)?;
  let created_at = DateTime::parse_from_rfc3339(&created_at_str)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

  Ok(Submission {
    uid: row.get(0)?,
    problem_identifier: row.get(1)?,
    verdict: row.get(2)?,
    created_at,
  })
}
