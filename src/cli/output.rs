use serde::Serialize;

use crate::model::board::Board;
use crate::model::task::{ListId, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub active: Vec<TaskJson>,
    pub completed: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        done: task.done,
    }
}

pub fn board_to_json(board: &Board) -> BoardJson {
    BoardJson {
        active: board.active().iter().map(task_to_json).collect(),
        completed: board.completed().iter().map(task_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] {} {}", task.checkbox_char(), task.id, task.text)
}

/// Format one list with its header and positional indices (the indices the
/// drag intents address)
pub fn format_list(board: &Board, id: ListId) -> Vec<String> {
    let tasks = board.list(id);
    let mut lines = Vec::new();
    lines.push(format!("{}:", id));
    if tasks.is_empty() {
        lines.push("  (empty)".to_string());
    } else {
        for (i, task) in tasks.iter().enumerate() {
            lines.push(format!("  {}. {}", i, format_task_line(task)));
        }
    }
    lines
}

/// Format the whole board, active list first
pub fn format_board(board: &Board) -> Vec<String> {
    let mut lines = format_list(board, ListId::Active);
    lines.extend(format_list(board, ListId::Completed));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_task_line() {
        let mut task = Task::new(42, "Buy milk".into());
        assert_eq!(format_task_line(&task), "[ ] 42 Buy milk");
        task.done = true;
        assert_eq!(format_task_line(&task), "[x] 42 Buy milk");
    }

    #[test]
    fn test_format_board_shows_indices_and_headers() {
        let mut board = Board::new();
        board
            .list_mut(ListId::Active)
            .push(Task::new(1, "one".into()));
        board
            .list_mut(ListId::Completed)
            .push(Task::new(2, "two".into()));

        let lines = format_board(&board);
        assert_eq!(lines[0], "active:");
        assert_eq!(lines[1], "  0. [ ] 1 one");
        assert_eq!(lines[2], "completed:");
        assert_eq!(lines[3], "  0. [ ] 2 two");
    }

    #[test]
    fn test_format_empty_list() {
        let board = Board::new();
        let lines = format_list(&board, ListId::Active);
        assert_eq!(lines, vec!["active:".to_string(), "  (empty)".to_string()]);
    }
}
