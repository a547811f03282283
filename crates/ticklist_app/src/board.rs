//! View-model sync between the store and the displayed task list.
//!
//! # Responsibility
//! - Mirror store state as an ordered list of displayable rows.
//! - Translate each user action into one store mutation plus one view
//!   mutation, in that order.
//!
//! # Invariants
//! - The board holds at most one row per task id, in store order.
//! - A view mutation is applied only after the store reports success; on
//!   failure the board is left untouched.
//! - The board is a derived cache; the store stays authoritative.

use log::info;
use ticklist_core::{RepoResult, Task, TaskId, TaskRepository, TaskService};

/// One displayable row: the task id is carried explicitly so rows never
/// rely on untyped payload attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            description: task.description,
            completed: task.completed,
        }
    }
}

/// Result of a board action: either both mutations were applied, or the
/// precondition failed and nothing was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    /// Store and view were both mutated.
    Applied,
    /// Precondition not met (blank input, no selection); no store call made.
    Skipped,
}

/// The in-memory ordered mirror of the store, plus the current selection.
pub struct TaskBoard {
    rows: Vec<TaskRow>,
    selected: Option<TaskId>,
}

impl TaskBoard {
    /// Reads every stored task once and builds the displayed list.
    ///
    /// # Contract
    /// - Called once per session, before the window is shown.
    /// - Rows appear in store order, pre-styled per their completion flag.
    pub fn initial_load<R: TaskRepository>(service: &TaskService<R>) -> RepoResult<Self> {
        let rows: Vec<TaskRow> = service.list_tasks()?.into_iter().map(TaskRow::from).collect();
        info!(
            "event=initial_load module=board status=ok rows={}",
            rows.len()
        );
        Ok(Self {
            rows,
            selected: None,
        })
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records the selection. Ids not present in the list are ignored.
    pub fn select(&mut self, id: TaskId) {
        if self.rows.iter().any(|row| row.id == id) {
            self.selected = Some(id);
        }
    }

    /// Creates a task from `text` and appends its row at the end of the
    /// list. Blank or whitespace-only text is skipped without a store call.
    pub fn add<R: TaskRepository>(
        &mut self,
        service: &TaskService<R>,
        text: &str,
    ) -> RepoResult<BoardOutcome> {
        if text.trim().is_empty() {
            return Ok(BoardOutcome::Skipped);
        }

        let task = service.add_task(text)?;
        self.rows.push(TaskRow::from(task));
        Ok(BoardOutcome::Applied)
    }

    /// Deletes the selected task from the store, then drops its row and
    /// clears the selection. Skipped when nothing is selected.
    pub fn delete_selected<R: TaskRepository>(
        &mut self,
        service: &TaskService<R>,
    ) -> RepoResult<BoardOutcome> {
        let Some(id) = self.selected else {
            return Ok(BoardOutcome::Skipped);
        };

        service.remove_task(id)?;
        self.rows.retain(|row| row.id != id);
        self.selected = None;
        Ok(BoardOutcome::Applied)
    }

    /// Marks the selected task done in the store, then restyles its row in
    /// place; position and selection are unchanged. Skipped when nothing is
    /// selected.
    pub fn complete_selected<R: TaskRepository>(
        &mut self,
        service: &TaskService<R>,
    ) -> RepoResult<BoardOutcome> {
        let Some(id) = self.selected else {
            return Ok(BoardOutcome::Skipped);
        };

        let task = service.complete_task(id)?;
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.completed = task.completed;
        }
        Ok(BoardOutcome::Applied)
    }
}
