use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  /// Case-insensitive, since older problem imports stored lowercase names
  pub fn from_str(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "Easy",
      Self::Medium => "Medium",
      Self::Hard => "Hard",
    }
  }
}

/// A practice problem. Submissions may reference it by either `id` or `slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
  pub id: String,
  pub slug: String,
  #[serde(default)]
  pub title: Option<String>,
  pub difficulty: Difficulty,
}

impl Problem {
  pub fn new(id: impl Into<String>, slug: impl Into<String>, difficulty: Difficulty) -> Self {
    Self {
      id: id.into(),
      slug: slug.into(),
      title: None,
      difficulty,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_difficulty_from_str_exact() {
    assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Easy));
    assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
  }

  #[test]
  fn test_difficulty_from_str_case_insensitive() {
    assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    assert_eq!(Difficulty::from_str(" medium "), Some(Difficulty::Medium));
  }

  #[test]
  fn test_difficulty_from_str_invalid() {
    assert_eq!(Difficulty::from_str("extreme"), None);
    assert_eq!(Difficulty::from_str(""), None);
  }

  #[test]
  fn test_problem_deserialize_camel_case() {
    let json = r#"{"id":"p9","slug":"lru-cache","difficulty":"Hard"}"#;
    let problem: Problem = serde_json::from_str(json).unwrap();
    assert_eq!(problem.slug, "lru-cache");
    assert_eq!(problem.difficulty, Difficulty::Hard);
    assert!(problem.title.is_none());
  }
}
