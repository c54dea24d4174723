//! List Sync
//!
//! Headless core of the two-list widget: items, storage backends, the
//! `ListView` capability and the controller that keeps a rendered list and
//! its store entry identical after every mutation.

mod config;
mod controller;
mod headless;
mod input;
mod item;
mod storage;
mod store;
mod view;

#[cfg(test)]
mod tests;

pub use config::{ListConfig, PRIORITIES_STORAGE_KEY, TASKS_STORAGE_KEY};
pub use controller::ListController;
pub use headless::HeadlessListView;
pub use input::{InputField, InputHandler, MemoryField, COMMIT_KEY};
pub use item::{commit_edit, label_decoration, normalize_text, Item};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::Store;
pub use view::{Confirm, ListView, RowHandler};
