//! Challenge progress domain — scheduled parts and which ones a user finished.
//!
//! A challenge of `days_of_week` × `weeks` has one [`Part`] per (day, week)
//! slot. Parts are completed through verification; this module only reads.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::PartId;
use serde::{Deserialize, Serialize};

pub use wire::{PartsQuery, UserChallenge};

/// One scheduled slot of a challenge. `day` and `week` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    pub part: PartId,
    pub day: u32,
    pub week: u32,
}

impl Part {
    /// `"Week 2, Day 3"`.
    pub fn label(&self) -> String {
        format!("Week {}, Day {}", self.week, self.day)
    }
}

/// Sort parts into schedule order: by week, then by day.
pub fn sort_by_schedule(parts: &mut [Part]) {
    parts.sort_by_key(|p| (p.week, p.day));
}

/// Completed fraction in `[0, 1]`; `0` when the schedule is empty.
pub fn completion_ratio(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed.min(total) as f64) / (total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, day: u32, week: u32) -> Part {
        Part {
            part: PartId::from(id),
            day,
            week,
        }
    }

    #[test]
    fn test_sort_by_schedule() {
        let mut parts = vec![part("c", 1, 2), part("b", 2, 1), part("a", 1, 1)];
        sort_by_schedule(&mut parts);
        let ids: Vec<&str> = parts.iter().map(|p| p.part.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(part("x", 3, 2).label(), "Week 2, Day 3");
    }

    #[test]
    fn test_completion_ratio() {
        assert_eq!(completion_ratio(0, 0), 0.0);
        assert_eq!(completion_ratio(3, 12), 0.25);
        assert_eq!(completion_ratio(20, 12), 1.0);
    }
}
