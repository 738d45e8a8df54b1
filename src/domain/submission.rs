use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a judge verdict string.
///
/// Short and long judge forms map to the same variant. Unrecognised strings
/// are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
  Accepted,
  WrongAnswer,
  TimeLimitExceeded,
  MemoryLimitExceeded,
  RuntimeError,
  CompilationError,
  Pending,
  Other(String),
}

impl Verdict {
  /// Only "AC" and "Accepted" are treated as accepted (case-sensitive)
  pub fn from_str(s: &str) -> Self {
    match s {
      "AC" | "Accepted" => Self::Accepted,
      "WA" | "Wrong Answer" => Self::WrongAnswer,
      "TLE" | "Time Limit Exceeded" => Self::TimeLimitExceeded,
      "MLE" | "Memory Limit Exceeded" => Self::MemoryLimitExceeded,
      "RE" | "Runtime Error" => Self::RuntimeError,
      "CE" | "Compilation Error" => Self::CompilationError,
      "Pending" => Self::Pending,
      other => Self::Other(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::Accepted => "AC",
      Self::WrongAnswer => "WA",
      Self::TimeLimitExceeded => "TLE",
      Self::MemoryLimitExceeded => "MLE",
      Self::RuntimeError => "RE",
      Self::CompilationError => "CE",
      Self::Pending => "Pending",
      Self::Other(s) => s,
    }
  }

  pub fn is_accepted(&self) -> bool {
    matches!(self, Self::Accepted)
  }
}

impl From<Verdict> for String {
  fn from(v: Verdict) -> Self {
    v.as_str().to_string()
  }
}

/// One attempt at a problem. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub uid: String,
  pub problem_identifier: String,
  /// Verdict exactly as the judge reported it ("Accepted", "WA", ...)
  pub verdict: String,
  pub created_at: DateTime<Utc>,
}

impl Submission {
  pub fn new(
    uid: impl Into<String>,
    problem_identifier: impl Into<String>,
    verdict: impl Into<String>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      uid: uid.into(),
      problem_identifier: problem_identifier.into(),
      verdict: verdict.into(),
      created_at,
    }
  }

  pub fn verdict(&self) -> Verdict {
    Verdict::from_str(&self.verdict)
  }

  pub fn is_accepted(&self) -> bool {
    self.verdict().is_accepted()
  }
}
