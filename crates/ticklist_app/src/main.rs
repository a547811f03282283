//! Startup wiring for the Ticklist window.
//!
//! # Responsibility
//! - Resolve the per-user data directory and initialize logging.
//! - Open the task store and run the initial load, once, before the window
//!   is shown.
//!
//! # Invariants
//! - Storage-initialization failure aborts startup with a diagnostic.
//! - The store is constructed exactly once and owned by the app state.

use iced::{Size, Task};
use log::error;
use std::path::{Path, PathBuf};
use ticklist_app::app::{TickApp, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use ticklist_app::board::TaskBoard;
use ticklist_core::db::open_db;
use ticklist_core::{default_log_level, init_logging, SqliteTaskRepository, TaskService};

const APP_DIR_NAME: &str = "ticklist";
const DB_FILE_NAME: &str = "tasks.sqlite3";

fn main() -> iced::Result {
    let data_dir = resolve_data_dir();
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        fatal(&format!(
            "cannot create data directory `{}`: {err}",
            data_dir.display()
        ));
    }

    // A broken logger must not keep the window from opening.
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs")) {
        eprintln!("ticklist: logging disabled: {err}");
    }

    let (service, board) = match bootstrap_store(&data_dir) {
        Ok(parts) => parts,
        Err(message) => fatal(&message),
    };

    iced::application(WINDOW_TITLE, TickApp::update, TickApp::view)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run_with(move || (TickApp::new(service, board), Task::none()))
}

/// Opens the store and performs the one-per-session initial load.
fn bootstrap_store(
    data_dir: &Path,
) -> Result<(TaskService<SqliteTaskRepository>, TaskBoard), String> {
    let db_path = data_dir.join(DB_FILE_NAME);
    let conn = open_db(&db_path)
        .map_err(|err| format!("cannot open task database `{}`: {err}", db_path.display()))?;
    let repo = SqliteTaskRepository::try_new(conn)
        .map_err(|err| format!("task store is not usable: {err}"))?;
    let service = TaskService::new(repo);
    let board =
        TaskBoard::initial_load(&service).map_err(|err| format!("cannot load tasks: {err}"))?;
    Ok((service, board))
}

fn resolve_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

fn fatal(message: &str) -> ! {
    error!("event=app_bootstrap module=app status=error error={message}");
    eprintln!("ticklist: {message}");
    std::process::exit(1);
}
