use serde::{Deserialize, Serialize};

/// Which of the two board lists a task (or drag endpoint) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListId {
    Active,
    Completed,
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListId::Active => write!(f, "active"),
            ListId::Completed => write!(f, "completed"),
        }
    }
}

/// A single task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id assigned at creation, never reused or changed
    pub id: u64,
    /// Task text, editable in place
    pub text: String,
    /// Done flag. Toggled by the user; does not decide which list the
    /// task sits in — only a drag moves tasks between lists.
    pub done: bool,
}

impl Task {
    /// Create a new task with the given id, not done
    pub fn new(id: u64, text: String) -> Self {
        Task {
            id,
            text,
            done: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
