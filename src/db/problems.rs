use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, Result};

use crate::domain::{Difficulty, Problem};

/// Insert a problem, replacing any existing row with the same id
pub fn insert_problem(conn: &Connection, problem: &Problem) -> Result<()> {
  conn.execute(
    r#"
    INSERT INTO problems (id, slug, title, difficulty) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(id) DO UPDATE SET
      slug = excluded.slug,
      title = excluded.title,
      difficulty = excluded.difficulty
    "#,
    params![
      problem.id,
      problem.slug,
      problem.title,
      problem.difficulty.as_str(),
    ],
  )?;
  Ok(())
}

/// Problems whose id or slug appears in `identifiers`
pub fn get_problems_by_identifiers(conn: &Connection, identifiers: &[String]) -> Result<Vec<Problem>> {
  if identifiers.is_empty() {
    return Ok(Vec::new());
  }

  let placeholders = (1..=identifiers.len())
    .map(|i| format!("?{}", i))
    .collect::<Vec<_>>()
    .join(", ");
  let sql = format!(
    r#"
    SELECT id, slug, title, difficulty
    FROM problems
    WHERE id IN ({0}) OR slug IN ({0})
    ORDER BY id
    "#,
    placeholders
  );

  let mut stmt = conn.prepare(&sql)?;
  let problems = stmt
    .query_map(params_from_iter(identifiers.iter()), row_to_problem)?
    .collect::<Result<Vec<_>>>()?;
  Ok(problems)
}

pub fn get_problem_count(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM problems", [], |row| row.get(0))
}

fn row_to_problem(row: &rusqlite::Row) -> Result<Problem> {
  let difficulty_str: String = row.get(3)?;
  let difficulty = Difficulty::from_str(&difficulty_str).ok_or_else(|| {
    rusqlite::Error::FromSqlConversionFailure(
      3,
      Type::Text,
      format!("unknown difficulty '{}'", difficulty_str).into(),
    )
  })?;

  Ok(Problem {
    id: row.get(0)?,
    slug: row.get(1)?,
    title: row.get(2)?,
    difficulty,
  })
}
