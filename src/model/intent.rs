use crate::model::task::ListId;
use crate::ops::reorder::DragEvent;

/// How a script line names an existing task: by its id, or by the position
/// the user can see (which the session resolves to an id, the same way a
/// click on a rendered row does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    Id(u64),
    At(ListId, usize),
}

/// A user intent handed in by the driving layer (script session, UI, ...).
/// Each intent is handled to completion before the next one is looked at.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Add a task with the given text to the end of the active list
    Add(String),
    /// Replace the text of the referenced task
    Edit(TaskRef, String),
    /// Remove the referenced task from whichever list holds it
    Delete(TaskRef),
    /// Flip the done flag on the referenced task
    Toggle(TaskRef),
    /// A finished drag gesture
    Drag(DragEvent),
    /// Render the current board state
    Show,
}
