//! Presentation Helpers
//!
//! Pure mapping from state to what the components display.

use crate::models::Task;
use crate::store::{AppState, Notice, Tone};

pub const EMPTY_STATE: &str = "No tasks yet. Add your first task above!";

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    pub description: String,
    pub completed: bool,
    pub class: &'static str,
}

pub fn task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            description: task.description.clone(),
            completed: task.completed,
            class: if task.completed { "task-row completed" } else { "task-row" },
        })
        .collect()
}

/// Shown iff the collection is empty
pub fn empty_state(tasks: &[Task]) -> Option<&'static str> {
    tasks.is_empty().then_some(EMPTY_STATE)
}

/// Status line color; progress messages are blue only while something is in flight
pub fn notice_class(notice: &Notice, busy: bool) -> &'static str {
    match notice.tone {
        Tone::Progress if busy => "notice progress",
        Tone::Progress | Tone::Info => "notice info",
        Tone::Error => "notice error",
    }
}

pub fn submit_label(state: &AppState) -> &'static str {
    if state.is_creating() {
        "Creating..."
    } else {
        "Add Task"
    }
}
