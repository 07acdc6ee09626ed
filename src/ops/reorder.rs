use serde::{Deserialize, Serialize};

use crate::model::task::{ListId, Task};

/// One endpoint of a drag gesture: a list and a position in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub list: ListId,
    /// Index into the list at drag-start time (source) or the position the
    /// task should occupy after the move (destination)
    pub index: usize,
}

/// A finished drag gesture. `destination` is `None` when the task was
/// dropped outside any valid target (the gesture was cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    /// Whether applying this event would change anything, given the current
    /// list lengths. Cancelled drags, drops back onto the starting slot, and
    /// out-of-range sources all leave the board as it is.
    pub fn moves_anything(&self, active_len: usize, completed_len: usize) -> bool {
        let Some(dest) = self.destination else {
            return false;
        };
        if dest == self.source {
            return false;
        }
        let source_len = match self.source.list {
            ListId::Active => active_len,
            ListId::Completed => completed_len,
        };
        self.source.index < source_len
    }
}

/// Apply one drag gesture to the two lists.
///
/// Takes both sequences by value and returns the new versions, so the
/// caller's old state never aliases the new one. The engine holds no state
/// of its own; each event is one atomic transition.
///
/// Removal happens before insertion. For a same-list drag that means the
/// raw destination index is already correct in both directions: dragging
/// downward, the removal has closed the gap below the insertion point;
/// dragging upward, nothing below the destination moved.
pub fn reorder(
    event: &DragEvent,
    active: Vec<Task>,
    completed: Vec<Task>,
) -> (Vec<Task>, Vec<Task>) {
    // Dropped outside any target: the gesture was cancelled.
    let Some(dest) = event.destination else {
        return (active, completed);
    };

    // Dropped back where it started.
    if dest == event.source {
        return (active, completed);
    }

    let mut active = active;
    let mut completed = completed;

    if event.source.list == dest.list {
        let list = match event.source.list {
            ListId::Active => &mut active,
            ListId::Completed => &mut completed,
        };
        if let Some(task) = remove_at(list, event.source.index) {
            let at = dest.index.min(list.len());
            list.insert(at, task);
        }
    } else {
        let (source, destination) = match event.source.list {
            ListId::Active => (&mut active, &mut completed),
            ListId::Completed => (&mut completed, &mut active),
        };
        if let Some(task) = remove_at(source, event.source.index) {
            let at = dest.index.min(destination.len());
            destination.insert(at, task);
        }
    }

    (active, completed)
}

/// Remove the task at `index`, or None when the index is past the end.
/// A stale index never panics; the drag degrades to a no-op.
fn remove_at(list: &mut Vec<Task>, index: usize) -> Option<Task> {
    if index < list.len() {
        Some(list.remove(index))
    } else {
        None
    }
}
