//! Item Entity
//!
//! One list entry. Identity is positional, so there is no id field.

use serde::{Deserialize, Deserializer, Serialize};

/// A single list entry as persisted: `{ "text": ..., "completed": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Label text
    pub text: String,
    /// Checkbox state
    #[serde(default, deserialize_with = "null_as_unchecked")]
    pub completed: bool,
}

impl Item {
    /// New, unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_state(text, false)
    }

    pub fn with_state(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }
}

/// `null` reads as unchecked, like a missing field
fn null_as_unchecked<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Trims submitted text. `None` when nothing but whitespace was entered.
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Label text after an inline edit is committed. Blank commits stay blank.
pub fn commit_edit(raw: &str) -> String {
    raw.trim().to_string()
}

/// CSS `text-decoration` of a row label
pub fn label_decoration(completed: bool) -> &'static str {
    if completed {
        "line-through"
    } else {
        "none"
    }
}
