//! iced state, update loop, and view for the task window.
//!
//! # Responsibility
//! - Translate widget events into board actions.
//! - Render the board as a scrollable list with add/delete/complete
//!   controls.
//!
//! # Invariants
//! - Every update handler runs synchronously on the UI thread; no
//!   subscriptions, no async tasks.
//! - A failed store operation leaves the displayed list unchanged and
//!   surfaces an inline error line.

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Center, Element, Fill, Theme};
use log::error;
use ticklist_core::{RepoError, SqliteTaskRepository, TaskId, TaskService};

use crate::board::{BoardOutcome, TaskBoard, TaskRow};

pub const WINDOW_TITLE: &str = "To-Do List";
pub const WINDOW_WIDTH: f32 = 370.0;
pub const WINDOW_HEIGHT: f32 = 500.0;

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    AddRequested,
    DeleteRequested,
    CompleteRequested,
    RowPressed(TaskId),
}

/// Application state: the store handle, its board mirror, and transient
/// widget state.
pub struct TickApp {
    service: TaskService<SqliteTaskRepository>,
    board: TaskBoard,
    input: String,
    status: Option<String>,
}

impl TickApp {
    pub fn new(service: TaskService<SqliteTaskRepository>, board: TaskBoard) -> Self {
        Self {
            service,
            board,
            input: String::new(),
            status: None,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::AddRequested => match self.board.add(&self.service, &self.input) {
                Ok(BoardOutcome::Applied) => {
                    self.input.clear();
                    self.status = None;
                }
                Ok(BoardOutcome::Skipped) => {}
                Err(err) => self.report_failure("task_add", &err),
            },
            Message::DeleteRequested => match self.board.delete_selected(&self.service) {
                Ok(_) => self.status = None,
                Err(err) => self.report_failure("task_delete", &err),
            },
            Message::CompleteRequested => match self.board.complete_selected(&self.service) {
                Ok(_) => self.status = None,
                Err(err) => self.report_failure("task_complete", &err),
            },
            Message::RowPressed(id) => {
                self.board.select(id);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = container(text(WINDOW_TITLE).size(24)).center_x(Fill);

        let list: Element<'_, Message> = if self.board.is_empty() {
            container(text("Nothing to do yet.").style(muted_text))
                .center(Fill)
                .into()
        } else {
            let selected = self.board.selected_id();
            scrollable(
                column(
                    self.board
                        .rows()
                        .iter()
                        .map(|task| task_row_view(task, selected == Some(task.id))),
                )
                .spacing(4),
            )
            .height(Fill)
            .into()
        };

        let input = text_input("Enter a new task", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::AddRequested)
            .padding(8);

        let controls = row![
            input,
            button("Add Task").on_press(Message::AddRequested),
            button("Clear Task")
                .on_press(Message::DeleteRequested)
                .style(button::secondary),
        ]
        .spacing(10)
        .align_y(Center);

        let complete = container(
            button("Complete Task")
                .on_press(Message::CompleteRequested)
                .style(button::success),
        )
        .center_x(Fill);

        let mut content = column![header, list].spacing(12).padding(16);
        if let Some(status) = &self.status {
            content = content.push(text(status.as_str()).size(13).style(danger_text));
        }
        content.push(controls).push(complete).into()
    }

    fn report_failure(&mut self, event: &str, err: &RepoError) {
        error!("event={event} module=app status=error error={err}");
        self.status = Some(format!("Could not save your change: {err}"));
    }
}

fn task_row_view(task: &TaskRow, selected: bool) -> Element<'_, Message> {
    let marker = if task.completed { "✓" } else { "•" };
    let label = if task.completed {
        text(task.description.as_str()).style(muted_text)
    } else {
        text(task.description.as_str())
    };

    button(row![text(marker), label].spacing(8).align_y(Center))
        .on_press(Message::RowPressed(task.id))
        .width(Fill)
        .padding(8)
        .style(if selected {
            button::secondary
        } else {
            button::text
        })
        .into()
}

// Completed rows are grayed out rather than removed, matching the muted
// treatment the window has always used for done tasks.
fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

fn danger_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
