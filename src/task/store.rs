//! In-memory task store (non-persistent).
//!
//! All mutations are synchronous and total: unknown ids and blank text are silent no-ops.
//! Every state change publishes a [`TaskSnapshot`] to subscribers.

use tokio::sync::watch;

use super::category::Category;
use super::progress::Progress;
use super::task::{Task, TaskId};
use crate::profile::{non_blank, Profile};

/// First id handed out to user-added tasks; 1–4 belong to seeded tasks.
const FIRST_USER_ID: u64 = 5;

/// State published to subscribers after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    pub progress: Progress,
}

pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    seeded: bool,
    current_category: Category,
    draft: String,
    updates: watch::Sender<TaskSnapshot>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        let (updates, _) = watch::channel(TaskSnapshot::default());
        Self {
            tasks: Vec::new(),
            next_id: FIRST_USER_ID,
            seeded: false,
            current_category: Category::default(),
            draft: String::new(),
            updates,
        }
    }

    /// Categories in display priority order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.updates.subscribe()
    }

    /// Derive the initial checklist from `profile`.
    ///
    /// Runs at most once per store; later calls return 0 without touching the collection.
    /// Seeded tasks go ahead of any tasks added before seeding.
    pub fn seed_from_profile(&mut self, profile: &Profile) -> usize {
        if self.seeded {
            tracing::debug!("Task store already seeded, ignoring profile");
            return 0;
        }
        self.seeded = true;

        let candidates = [
            (1, profile.course_1.as_str(), Category::Gelisim, true),
            (2, profile.course_2.as_str(), Category::Gelisim, true),
            (3, profile.q1.as_deref().unwrap_or_default(), Category::Hazirlik, false),
            (4, profile.q2.as_deref().unwrap_or_default(), Category::Hazirlik, false),
        ];

        let seeded: Vec<Task> = candidates
            .into_iter()
            .filter_map(|(id, value, category, is_course)| {
                let value = non_blank(value)?;
                let text = if is_course {
                    format!("{} kursunu tamamla", value)
                } else {
                    format!("Hedef: {}", value)
                };
                Task::new(TaskId::new(id), &text, category)
            })
            .collect();

        let count = seeded.len();
        let added_early = std::mem::replace(&mut self.tasks, seeded);
        self.tasks.extend(added_early);
        tracing::info!("Seeded {} tasks from profile of {}", count, profile.name);
        self.publish();
        count
    }

    /// Append a task, returning its id.
    ///
    /// Blank `text` leaves the store unchanged and returns `None`.
    pub fn add_task(&mut self, text: &str, category: Category) -> Option<TaskId> {
        let id = TaskId::new(self.next_id);
        let Some(task) = Task::new(id, text, category) else {
            tracing::debug!("Ignoring blank task text");
            return None;
        };
        self.next_id += 1;
        self.tasks.push(task);
        tracing::debug!("Added task {} under {}", id, category);
        self.publish();
        Some(id)
    }

    /// Flip completion of `id`. Returns `false` if no such task exists.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!("Toggle ignored, task {} not found", id);
            return false;
        };
        task.toggle();
        tracing::debug!("Task {} completed={}", id, task.is_completed());
        self.publish();
        true
    }

    /// Remove `id`. Returns `false` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!("Delete ignored, task {} not found", id);
            return false;
        };
        self.tasks.remove(index);
        tracing::debug!("Deleted task {}", id);
        self.publish();
        true
    }

    /// Tasks grouped by category in priority order, omitting empty categories.
    ///
    /// Recomputed from the current collection on every call.
    pub fn grouped_view(&self) -> impl Iterator<Item = (Category, Vec<&Task>)> + '_ {
        Category::ALL.into_iter().filter_map(move |category| {
            let group: Vec<&Task> = self
                .tasks
                .iter()
                .filter(|task| task.category() == category)
                .collect();
            (!group.is_empty()).then_some((category, group))
        })
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn set_current_category(&mut self, category: Category) {
        self.current_category = category;
    }

    /// Pending input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Add the draft under the current category and clear it.
    ///
    /// A blank draft is left in place and nothing is added.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = std::mem::take(&mut self.draft);
        match self.add_task(&draft, self.current_category) {
            Some(id) => Some(id),
            None => {
                self.draft = draft;
                None
            }
        }
    }

    fn publish(&self) {
        self.updates.send_replace(TaskSnapshot {
            tasks: self.tasks.clone(),
            progress: self.progress(),
        });
    }
}
