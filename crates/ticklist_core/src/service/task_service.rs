//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the three user actions plus startup
//!   load.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer remains storage-agnostic.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task from user-entered text.
    ///
    /// # Contract
    /// - The description is trimmed before persistence.
    /// - Blank input is rejected with a validation error.
    /// - The returned task carries the store-assigned id and
    ///   `completed = false`.
    pub fn add_task(&self, text: &str) -> RepoResult<Task> {
        self.repo.create_task(text)
    }

    /// Marks the task with the given id as done and persists the change.
    ///
    /// The row id is used directly as the lookup key into the store; the
    /// persisted record is returned so callers can restyle their row from
    /// durable state rather than an assumed one.
    pub fn complete_task(&self, id: TaskId) -> RepoResult<Task> {
        let mut task = self.repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;
        task.mark_completed();
        self.repo.update_task(&task)?;
        Ok(task)
    }

    /// Deletes the task with the given id. Unknown ids are a no-op.
    pub fn remove_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }

    /// Fetches one task by id.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Returns every stored task in insertion order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }
}
