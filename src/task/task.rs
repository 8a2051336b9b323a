//! Core Task type.
//!
//! # Invariants
//! - `text` is non-empty
//! - `id` is unique within a `TaskStore` and never reused
//! - `text` and `category` never change after construction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Identifier of a task within a store.
///
/// Ids 1–4 are reserved for tasks seeded from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    category: Category,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create an incomplete task.
    ///
    /// Returns `None` when `text` is empty or whitespace-only. The stored text is trimmed.
    pub(crate) fn new(id: TaskId, text: &str, category: Category) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            category,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
