//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate task data before SQL mutations.
//! - `list_tasks` returns rows in insertion order (`ORDER BY id`).
//! - `delete_task` is idempotent; deleting an unknown id is a no-op.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::{normalize_description, Task, TaskId, TaskValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, description, completed FROM tasks";

const REQUIRED_TASK_COLUMNS: &[&str] = &["id", "description", "completed"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Inserts a task with the normalized description and `completed=false`,
    /// returning the stored record with its assigned id.
    fn create_task(&self, description: &str) -> RepoResult<Task>;
    /// Overwrites description and completion flag for `task.id`. Unknown ids
    /// are a no-op.
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    /// Deletes the row with the given id. Unknown ids are a no-op.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    /// Fetches one task by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Returns every task in insertion order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
///
/// Owns the connection for its whole lifetime: the store is opened once at
/// startup, used synchronously from the UI thread, and closed on drop.
pub struct SqliteTaskRepository {
    conn: Connection,
}

impl SqliteTaskRepository {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// Rejects connections that have not been bootstrapped through
    /// [`crate::db::open_db`], so repository code can assume the `tasks`
    /// schema exists.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Read-only access to the underlying connection for diagnostics and
    /// test setup.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn create_task(&self, description: &str) -> RepoResult<Task> {
        let description = normalize_description(description)?;

        self.conn.execute(
            "INSERT INTO tasks (description, completed) VALUES (?1, 0);",
            params![description.as_str()],
        )?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            description,
            completed: false,
        })
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        self.conn.execute(
            "UPDATE tasks SET description = ?1, completed = ?2 WHERE id = ?3;",
            params![
                task.description.as_str(),
                bool_to_int(task.completed),
                task.id
            ],
        )?;

        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let mut stmt = conn.prepare("PRAGMA table_info(tasks);")?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>("name")?);
    }

    if columns.is_empty() {
        return Err(RepoError::MissingRequiredTable("tasks"));
    }

    for &required in REQUIRED_TASK_COLUMNS {
        if !columns.iter().any(|column| column.as_str() == required) {
            return Err(RepoError::MissingRequiredColumn {
                table: "tasks",
                column: required,
            });
        }
    }

    Ok(())
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    let task = Task {
        id: row.get("id")?,
        description: row.get("description")?,
        completed,
    };
    task.validate()
        .map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(task)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
