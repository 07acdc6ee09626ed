use chrono::Utc;

use super::task::{ListId, Task};
use crate::ops::reorder::{self, DragEvent};

/// The task board: two ordered lists plus the id watermark.
///
/// The board is the sole owner of both sequences. List order is display
/// order (the order tasks are dragged into), not creation order. A task id
/// lives in exactly one of the two lists from creation until deletion.
#[derive(Debug, Clone, Default)]
pub struct Board {
    active: Vec<Task>,
    completed: Vec<Task>,
    /// Highest id issued so far, so same-millisecond adds stay distinct
    last_id: u64,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board::default()
    }

    /// Get tasks from a specific list
    pub fn list(&self, id: ListId) -> &[Task] {
        match id {
            ListId::Active => &self.active,
            ListId::Completed => &self.completed,
        }
    }

    /// Get mutable tasks from a specific list
    pub fn list_mut(&mut self, id: ListId) -> &mut Vec<Task> {
        match id {
            ListId::Active => &mut self.active,
            ListId::Completed => &mut self.completed,
        }
    }

    /// All active tasks, in display order
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// All completed-list tasks, in display order
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Issue a fresh task id: the current UTC time in milliseconds, bumped
    /// past every id issued before it so ids stay unique and monotonic.
    pub fn next_task_id(&mut self) -> u64 {
        let stamp = Utc::now().timestamp_millis().max(0) as u64;
        let id = stamp.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Find a task by id in either list
    pub fn find_task(&self, task_id: u64) -> Option<&Task> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|t| t.id == task_id)
    }

    /// Find a task by id in either list, mutable
    pub fn find_task_mut(&mut self, task_id: u64) -> Option<&mut Task> {
        self.active
            .iter_mut()
            .chain(self.completed.iter_mut())
            .find(|t| t.id == task_id)
    }

    /// Apply a completed drag gesture: hand both lists to the reorder
    /// engine and install what comes back. Returns whether anything moved
    /// (cancelled drags and true no-ops leave the board untouched).
    pub fn apply_drag(&mut self, event: &DragEvent) -> bool {
        if !event.moves_anything(self.active.len(), self.completed.len()) {
            return false;
        }
        let active = std::mem::take(&mut self.active);
        let completed = std::mem::take(&mut self.completed);
        let (active, completed) = reorder::reorder(event, active, completed);
        self.active = active;
        self.completed = completed;
        true
    }
}
