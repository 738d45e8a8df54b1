use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::User;

pub fn insert_user(conn: &Connection, user: &User) -> Result<()> {
  conn.execute(
    r#"
    INSERT INTO users (uid, full_name) VALUES (?1, ?2)
    ON CONFLICT(uid) DO UPDATE SET full_name = excluded.full_name
    "#,
    params![user.uid, user.full_name],
  )?;
  Ok(())
}

pub fn get_user_by_uid(conn: &Connection, uid: &str) -> Result<Option<User>> {
  conn
    .query_row(
      "SELECT uid, full_name FROM users WHERE uid = ?1",
      params![uid],
      row_to_user,
    )
    .optional()
}

/// Case-insensitive literal substring search on full name, first match by name
pub fn find_user_by_name(conn: &Connection, name: &str) -> Result<Option<User>> {
  conn
    .query_row(
      r#"
      SELECT uid, full_name FROM users
      WHERE instr(LOWER(full_name), LOWER(?1)) > 0
      ORDER BY full_name, uid
      LIMIT 1
      "#,
      params![name],
      row_to_user,
    )
    .optional()
}

pub fn get_all_users(conn: &Connection) -> Result<Vec<User>> {
  let mut stmt = conn.prepare("SELECT uid, full_name FROM users ORDER BY uid")?;
  let users = stmt
    .query_map([], row_to_user)?
    .collect::<Result<Vec<_>>>()?;
  Ok(users)
}

fn row_to_user(row: &rusqlite::Row) -> Result<User> {
  Ok(User {
    uid: row.get(0)?,
    full_name: row.get(1)?,
  })
}
