//! List Configuration
//!
//! Everything that distinguishes the task list from the priority list.

/// Storage key of the task list
pub const TASKS_STORAGE_KEY: &str = "todo-tasks";
/// Storage key of the priority list
pub const PRIORITIES_STORAGE_KEY: &str = "todo-priorities";

/// Per-list configuration passed to the controller and the page shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Key of the JSON array in the key-value store
    pub storage_key: String,
    /// Element id of the rendered list container
    pub container_id: String,
    /// Element id of the text field feeding the list
    pub input_id: String,
    /// Heading shown above the list
    pub title: String,
    /// Plural noun used in prompts ("tasks", "priorities")
    pub noun: String,
}

impl ListConfig {
    pub fn new(
        storage_key: impl Into<String>,
        container_id: impl Into<String>,
        input_id: impl Into<String>,
    ) -> Self {
        Self {
            storage_key: storage_key.into(),
            container_id: container_id.into(),
            input_id: input_id.into(),
            title: String::from("List"),
            noun: String::from("items"),
        }
    }

    pub fn with_labels(mut self, title: impl Into<String>, noun: impl Into<String>) -> Self {
        self.title = title.into();
        self.noun = noun.into();
        self
    }

    pub fn tasks() -> Self {
        Self::new(TASKS_STORAGE_KEY, "todo-list", "taskInput").with_labels("Tasks", "tasks")
    }

    pub fn priorities() -> Self {
        Self::new(PRIORITIES_STORAGE_KEY, "priority-list", "priorityInput")
            .with_labels("Priorities", "priorities")
    }

    /// Confirmation prompt shown before deleting every row
    pub fn delete_all_prompt(&self) -> String {
        format!("Are you sure you want to delete all {}?", self.noun)
    }
}
