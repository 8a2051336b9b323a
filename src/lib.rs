//! # taskboard
//!
//! Client-side task tracker core: seeds a checklist from the user's profile, then manages
//! additional tasks grouped by category with progress reported as a completion ratio.
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────────────┐
//!        │            Dashboard             │
//!        └───────┬──────────────────┬───────┘
//!                │                  │
//!                ▼                  ▼
//!       ┌─────────────────┐  ┌─────────────────┐
//!       │  ProfileLoader  │  │    TaskStore    │
//!       └────────┬────────┘  └─────────────────┘
//!                │
//!                ▼
//!       ┌─────────────────┐
//!       │  ProfileSource  │  (GET /userstats)
//!       └─────────────────┘
//! ```
//!
//! ## Flow
//! 1. `ProfileLoader` fetches the profile once (`Loading -> Ready | Failed`)
//! 2. On `Ready`, `TaskStore` seeds up to four tasks from the profile
//! 3. The rendering layer reads grouped tasks and progress, and calls add/toggle/delete
//!
//! Nothing is persisted; state lives for the lifetime of the process.
//!
//! ## Modules
//! - `config`: environment-driven configuration
//! - `profile`: profile record, fetch sources and the one-shot loader
//! - `task`: tasks, categories, progress and the in-memory store
//! - `dashboard`: composition of loader and store

pub mod config;
pub mod dashboard;
pub mod profile;
pub mod task;

pub use config::Config;
pub use dashboard::Dashboard;
pub use profile::{Profile, ProfileFetchError, ProfileLoader, ProfileSource, ProfileStatus};
pub use task::{Category, Progress, Task, TaskId, TaskStore};
