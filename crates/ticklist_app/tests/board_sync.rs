use ticklist_app::board::{BoardOutcome, TaskBoard};
use ticklist_core::db::open_db_in_memory;
use ticklist_core::{
    RepoError, RepoResult, SqliteTaskRepository, Task, TaskId, TaskRepository, TaskService,
};

fn service() -> TaskService<SqliteTaskRepository> {
    TaskService::new(SqliteTaskRepository::try_new(open_db_in_memory().unwrap()).unwrap())
}

#[test]
fn initial_load_mirrors_store_rows_without_duplicates() {
    let service = service();
    let first = service.add_task("first").unwrap();
    let second = service.add_task("second").unwrap();
    service.add_task("third").unwrap();
    service.complete_task(second.id).unwrap();

    let board = TaskBoard::initial_load(&service).unwrap();

    let rows = board.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, first.id);
    assert!(!rows[0].completed);
    assert_eq!(rows[1].id, second.id);
    assert!(rows[1].completed);
    assert!(!rows[2].completed);

    let mut ids: Vec<TaskId> = rows.iter().map(|row| row.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(board.selected_id(), None);
}

#[test]
fn initial_load_of_empty_store_shows_nothing() {
    let board = TaskBoard::initial_load(&service()).unwrap();
    assert!(board.is_empty());
}

#[test]
fn add_appends_row_at_end_and_persists() {
    let service = service();
    let mut board = TaskBoard::initial_load(&service).unwrap();
    board.add(&service, "existing").unwrap();

    let outcome = board.add(&service, "  new entry  ").unwrap();
    assert_eq!(outcome, BoardOutcome::Applied);

    let rows = board.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].description, "new entry");
    assert!(!rows[1].completed);

    let stored = service.get_task(rows[1].id).unwrap().unwrap();
    assert_eq!(stored.description, "new entry");
    assert!(!stored.completed);
}

#[test]
fn blank_add_is_skipped_without_store_call() {
    let service = service();
    let mut board = TaskBoard::initial_load(&service).unwrap();

    for blank in ["", "   ", "\t"] {
        assert_eq!(board.add(&service, blank).unwrap(), BoardOutcome::Skipped);
    }

    assert!(board.is_empty());
    assert!(service.list_tasks().unwrap().is_empty());
}

#[test]
fn delete_and_complete_without_selection_are_skipped() {
    let service = service();
    service.add_task("untouched").unwrap();
    let mut board = TaskBoard::initial_load(&service).unwrap();

    assert_eq!(
        board.delete_selected(&service).unwrap(),
        BoardOutcome::Skipped
    );
    assert_eq!(
        board.complete_selected(&service).unwrap(),
        BoardOutcome::Skipped
    );
    assert_eq!(board.rows().len(), 1);
    assert_eq!(service.list_tasks().unwrap().len(), 1);
}

#[test]
fn delete_selected_removes_row_and_record() {
    let service = service();
    let doomed = service.add_task("doomed").unwrap();
    let kept = service.add_task("kept").unwrap();
    let mut board = TaskBoard::initial_load(&service).unwrap();

    board.select(doomed.id);
    assert_eq!(
        board.delete_selected(&service).unwrap(),
        BoardOutcome::Applied
    );

    assert_eq!(board.rows().len(), 1);
    assert_eq!(board.rows()[0].id, kept.id);
    assert_eq!(board.selected_id(), None);
    assert!(service.get_task(doomed.id).unwrap().is_none());

    // Selection was cleared, so a second delete is a no-op.
    assert_eq!(
        board.delete_selected(&service).unwrap(),
        BoardOutcome::Skipped
    );
}

#[test]
fn complete_selected_restyles_row_in_place() {
    let service = service();
    let first = service.add_task("first").unwrap();
    let second = service.add_task("second").unwrap();
    let mut board = TaskBoard::initial_load(&service).unwrap();

    board.select(first.id);
    assert_eq!(
        board.complete_selected(&service).unwrap(),
        BoardOutcome::Applied
    );

    let rows = board.rows();
    assert_eq!(rows[0].id, first.id);
    assert!(rows[0].completed);
    assert_eq!(rows[1].id, second.id);
    assert!(!rows[1].completed);
    assert_eq!(board.selected_id(), Some(first.id));

    assert!(service.get_task(first.id).unwrap().unwrap().completed);
}

#[test]
fn select_ignores_unknown_ids() {
    let service = service();
    service.add_task("only row").unwrap();
    let mut board = TaskBoard::initial_load(&service).unwrap();

    board.select(999);
    assert_eq!(board.selected_id(), None);
}

struct FailingRepo {
    seed: Vec<Task>,
}

fn injected() -> RepoError {
    RepoError::InvalidData("injected storage failure".to_string())
}

impl TaskRepository for FailingRepo {
    fn create_task(&self, _description: &str) -> RepoResult<Task> {
        Err(injected())
    }

    fn update_task(&self, _task: &Task) -> RepoResult<()> {
        Err(injected())
    }

    fn delete_task(&self, _id: TaskId) -> RepoResult<()> {
        Err(injected())
    }

    fn get_task(&self, _id: TaskId) -> RepoResult<Option<Task>> {
        Err(injected())
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.seed.clone())
    }
}

#[test]
fn store_failure_leaves_board_unchanged() {
    let service = TaskService::new(FailingRepo {
        seed: vec![Task {
            id: 1,
            description: "survivor".to_string(),
            completed: false,
        }],
    });
    let mut board = TaskBoard::initial_load(&service).unwrap();
    board.select(1);

    assert!(board.add(&service, "never lands").is_err());
    assert_eq!(board.rows().len(), 1);

    assert!(board.complete_selected(&service).is_err());
    assert!(!board.rows()[0].completed);

    assert!(board.delete_selected(&service).is_err());
    assert_eq!(board.rows().len(), 1);
    assert_eq!(board.selected_id(), Some(1));
}
