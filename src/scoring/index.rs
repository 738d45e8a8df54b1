use std::collections::HashMap;

use crate::domain::{Difficulty, Problem};

/// Difficulty lookup keyed by both problem id and slug.
///
/// Built once per report so each solved identifier resolves in O(1).
/// When one problem's id collides with another's slug, the id wins.
#[derive(Debug, Default)]
pub struct ProblemIndex {
  by_key: HashMap<String, Difficulty>,
}

impl ProblemIndex {
  pub fn build(problems: &[Problem]) -> Self {
    let mut by_key = HashMap::with_capacity(problems.len() * 2);

    // Slugs first so ids overwrite them on collision
    for problem in problems {
      by_key.insert(problem.slug.clone(), problem.difficulty);
    }
    for problem in problems {
      by_key.insert(problem.id.clone(), problem.difficulty);
    }

    Self { by_key }
  }

  pub fn difficulty_of(&self, identifier: &str) -> Option<Difficulty> {
    self.by_key.get(identifier).copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_by_id_and_slug() {
    let index = ProblemIndex::build(&[
      Problem::new("p1", "two-sum", Difficulty::Easy),
      Problem::new("p2", "lru-cache", Difficulty::Hard),
    ]);

    assert_eq!(index.difficulty_of("p1"), Some(Difficulty::Easy));
    assert_eq!(index.difficulty_of("two-sum"), Some(Difficulty::Easy));
    assert_eq!(index.difficulty_of("p2"), Some(Difficulty::Hard));
    assert_eq!(index.difficulty_of("lru-cache"), Some(Difficulty::Hard));
  }

  #[test]
  fn test_lookup_unknown_identifier() {
    let index = ProblemIndex::build(&[Problem::new("p1", "two-sum", Difficulty::Easy)]);
    assert_eq!(index.difficulty_of("three-sum"), None);
  }

  #[test]
  fn test_id_wins_over_colliding_slug() {
    // "shared" is the id of a Hard problem and the slug of a Medium one
    let index = ProblemIndex::build(&[
      Problem::new("m1", "shared", Difficulty::Medium),
      Problem::new("shared", "graph-walk", Difficulty::Hard),
    ]);
    assert_eq!(index.difficulty_of("shared"), Some(Difficulty::Hard));
  }

  #[test]
  fn test_empty_index() {
    let index = ProblemIndex::build(&[]);
    assert_eq!(index.difficulty_of("p1"), None);
  }
}
