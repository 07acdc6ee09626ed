use crate::model::board::Board;
use crate::model::task::{ListId, Task};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
}

/// Add a task to the end of the active list.
/// The text is trimmed; empty text is rejected. Returns the assigned id.
pub fn add_task(board: &mut Board, text: &str) -> Result<u64, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }

    let id = board.next_task_id();
    board
        .list_mut(ListId::Active)
        .push(Task::new(id, text.to_string()));
    Ok(id)
}

/// Replace a task's text in place. Position and done flag are untouched.
/// Returns false (a silent no-op) when no task has this id — ids are only
/// ever produced by the board, so an unknown id is a stale one, not an error.
pub fn edit_text(board: &mut Board, task_id: u64, new_text: &str) -> bool {
    match board.find_task_mut(task_id) {
        Some(task) => {
            task.text = new_text.to_string();
            true
        }
        None => false,
    }
}

/// Remove a task from whichever list holds it.
/// Returns false when no task has this id.
pub fn delete_task(board: &mut Board, task_id: u64) -> bool {
    for list_id in [ListId::Active, ListId::Completed] {
        let list = board.list_mut(list_id);
        if let Some(idx) = list.iter().position(|t| t.id == task_id) {
            list.remove(idx);
            return true;
        }
    }
    false
}

/// Flip a task's done flag in place. The task stays in its list at its
/// position — moving between lists is a separate, user-driven drag.
/// Returns false when no task has this id.
pub fn toggle_done(board: &mut Board, task_id: u64) -> bool {
    match board.find_task_mut(task_id) {
        Some(task) => {
            task.done = !task.done;
            true
        }
        None => false,
    }
}
