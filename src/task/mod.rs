//! Task module - checklist items, categories and the in-memory store.
//!
//! - Categories are a closed enum with a fixed display order
//! - Task mutations are total; invalid input is a no-op
//! - Derived views (grouping, progress) are pure queries over the current collection

mod category;
mod progress;
mod store;
pub mod task;

pub use category::{Category, UnknownCategory};
pub use progress::Progress;
pub use store::{TaskSnapshot, TaskStore};
pub use task::{Task, TaskId};
