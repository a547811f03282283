//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered as one row in the window.
//! - Provide normalization and validation for user-entered descriptions.
//!
//! # Invariants
//! - `id` is assigned by the store on creation, is monotonic, and is never
//!   reused for another task.
//! - `description` is non-empty after trimming surrounding whitespace.
//! - `completed` starts `false` and only ever flips to `true`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// A single to-do item: identifier, description text, completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned row id. Immutable after creation.
    pub id: TaskId,
    /// Trimmed, non-empty description text.
    pub description: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

/// Validation failure for task data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description was empty or whitespace-only after trimming.
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => {
                write!(f, "task description must not be empty after trimming")
            }
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Marks this task as done.
    ///
    /// There is no inverse operation; completion is one-way.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Checks the model invariants enforced on every store write.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Trims surrounding whitespace and rejects empty input.
///
/// All write paths normalize descriptions through here, so the store never
/// holds untrimmed or blank text.
pub fn normalize_description(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}
