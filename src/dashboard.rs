//! Dashboard state: the profile loader and the task store, wired in load order.

use std::sync::Arc;

use crate::config::Config;
use crate::profile::{
    HttpProfileSource, Profile, ProfileFetchError, ProfileLoader, ProfileSource, ProfileStatus,
};
use crate::task::{Category, Progress, Task, TaskId, TaskStore};

/// Everything the rendering layer reads from and writes to.
pub struct Dashboard {
    loader: ProfileLoader,
    store: TaskStore,
}

impl Dashboard {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            loader: ProfileLoader::new(source),
            store: TaskStore::new(),
        }
    }

    /// Build a dashboard that fetches the profile over HTTP.
    pub fn from_config(config: &Config) -> Result<Self, ProfileFetchError> {
        let source = HttpProfileSource::from_config(config)?;
        Ok(Self::new(Arc::new(source)))
    }

    /// Load the profile and seed the task store from it.
    ///
    /// A failed fetch leaves the store empty; the dashboard stays usable either way.
    pub async fn init(&mut self) -> &ProfileStatus {
        match self.loader.load().await {
            ProfileStatus::Ready(profile) => {
                self.store.seed_from_profile(profile);
            }
            ProfileStatus::Failed(_) => {
                tracing::warn!("Continuing without profile, task list starts empty");
            }
            ProfileStatus::Loading => {}
        }
        self.loader.status()
    }

    pub fn profile_status(&self) -> &ProfileStatus {
        self.loader.status()
    }

    /// Profile for the profile panel; `None` while loading or after a failed fetch.
    pub fn profile(&self) -> Option<&Profile> {
        self.loader.profile()
    }

    pub fn categories(&self) -> &'static [Category] {
        self.store.categories()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn grouped_view(&self) -> impl Iterator<Item = (Category, Vec<&Task>)> + '_ {
        self.store.grouped_view()
    }

    pub fn progress(&self) -> Progress {
        self.store.progress()
    }

    pub fn add_task(&mut self, text: &str, category: Category) -> Option<TaskId> {
        self.store.add_task(text, category)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        self.store.toggle_task(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.delete_task(id)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }
}
