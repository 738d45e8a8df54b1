//! Fixture import for seeding a database from JSON.

use rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::db;
use crate::domain::{Problem, Submission, User};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Records to load, as exported by the platform's document store
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Fixture {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub users: usize,
    pub problems: usize,
    pub submissions: usize,
}

/// Insert every record in one transaction; nothing is written on failure
pub fn import_fixture(conn: &mut Connection, fixture: &Fixture) -> Result<ImportSummary, ImportError> {
    let tx = conn.transaction()?;

    for user in &fixture.users {
        db::insert_user(&tx, user)?;
    }
    for problem in &fixture.problems {
        db::insert_problem(&tx, problem)?;
    }
    for submission in &fixture.submissions {
        db::insert_submission(&tx, submission)?;
    }

    tx.commit()?;

    let summary = ImportSummary {
        users: fixture.users.len(),
        problems: fixture.problems.len(),
        submissions: fixture.submissions.len(),
    };
    tracing::info!(
        users = summary.users,
        problems = summary.problems,
        submissions = summary.submissions,
        "Imported fixture"
    );
    Ok(summary)
}
