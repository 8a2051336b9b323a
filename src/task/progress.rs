//! Completion ratio over a task collection.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Aggregate completion of a task collection.
///
/// # Invariants
/// - `completed <= total`
/// - `percent` is in `0..=100`, and `0` when `total == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    /// Compute progress from raw counts, rounding half up.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let percent = if total == 0 {
            0
        } else {
            // round(100 * c / t) == floor((200 * c + t) / (2 * t))
            ((200 * completed + total) / (2 * total)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (completed, total) = tasks.into_iter().fold((0, 0), |(done, all), task| {
            (done + usize::from(task.is_completed()), all + 1)
        });
        Self::from_counts(completed, total)
    }

    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        let progress = Progress::from_counts(0, 0);
        assert_eq!(progress.percent, 0);
        assert!(!progress.is_done());
        assert_eq!(progress.to_string(), "0/0");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Progress::from_counts(1, 4).percent, 25);
        assert_eq!(Progress::from_counts(1, 3).percent, 33);
        assert_eq!(Progress::from_counts(2, 3).percent, 67);
        assert_eq!(Progress::from_counts(1, 8).percent, 13);
        assert_eq!(Progress::from_counts(3, 3).percent, 100);
    }

    #[test]
    fn test_display_and_done() {
        let progress = Progress::from_counts(2, 2);
        assert_eq!(progress.to_string(), "2/2");
        assert!(progress.is_done());
    }
}
