use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Count consecutive active UTC days ending today or yesterday.
///
/// A day is active if any timestamp falls on it. If the most recent active
/// day is older than yesterday (or in the future), the streak is 0.
pub fn current_streak<I>(timestamps: I, now: DateTime<Utc>) -> i64
where
  I: IntoIterator<Item = DateTime<Utc>>,
{
  let days: BTreeSet<NaiveDate> = timestamps.into_iter().map(|ts| ts.date_naive()).collect();

  let Some(&latest) = days.last() else {
    return 0;
  };

  let today = now.date_naive();
  let yesterday = today.pred_opt();
  if latest != today && Some(latest) != yesterday {
    return 0;
  }

  let mut streak = 0;
  let mut expected = Some(latest);
  for day in days.iter().rev() {
    if Some(*day) != expected {
      break;
    }
    streak += 1;
    expected = day.pred_opt();
  }
  streak
}
