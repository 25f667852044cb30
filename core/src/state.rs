//! View-model state and the fixed user-facing failure messages.

use crate::types::{Todo, TodoId};

/// Shown when `add` is called with a blank title. No request is sent.
pub const EMPTY_TITLE_ERROR: &str = "Todo title cannot be empty";

/// Everything the rendered page depends on. Reset on process start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    /// Server order, replaced wholesale on every successful fetch.
    pub todos: Vec<Todo>,
    pub draft_title: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl ClientState {
    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }
}

/// The four network-backed operations, each with its own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Toggle,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch todos",
            Operation::Add => "Failed to add todo",
            Operation::Toggle => "Failed to toggle todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}
