//! Plain-text rendering of the todo page.

use crate::state::ClientState;

pub const HEADING: &str = "Todo List";
pub const PLACEHOLDER: &str = "Enter new todo";
pub const LOADING: &str = "Loading...";

/// Render the page top to bottom: heading, input line, loading and error
/// banners, then one line per todo in server order.
pub fn render(state: &ClientState) -> String {
    let mut lines = vec![HEADING.to_string()];

    if state.draft_title.is_empty() {
        lines.push(format!("> ({PLACEHOLDER})"));
    } else {
        lines.push(format!("> {}", state.draft_title));
    }

    if state.loading {
        lines.push(LOADING.to_string());
    }
    if let Some(error) = &state.error {
        lines.push(format!("error: {error}"));
    }

    lines.extend(state.todos.iter().map(|todo| {
        let mark = if todo.is_completed { 'x' } else { ' ' };
        format!("[{mark}] {}  {}", todo.id, todo.title)
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Todo, TodoId};

    #[test]
    fn empty_state_shows_placeholder() {
        let out = render(&ClientState::default());
        assert_eq!(out, "Todo List\n> (Enter new todo)\n");
    }

    #[test]
    fn single_open_item() {
        let state = ClientState {
            todos: vec![Todo {
                id: TodoId::from(1),
                title: "buy milk".to_string(),
                is_completed: false,
            }],
            ..ClientState::default()
        };
        let out = render(&state);
        assert!(out.ends_with("[ ] 1  buy milk\n"), "{out}");
        assert!(!out.contains(LOADING));
    }

    #[test]
    fn banners_and_completed_items() {
        let state = ClientState {
            todos: vec![
                Todo {
                    id: TodoId::from(1),
                    title: "buy milk".to_string(),
                    is_completed: true,
                },
                Todo {
                    id: TodoId::from(2),
                    title: "walk dog".to_string(),
                    is_completed: false,
                },
            ],
            draft_title: "call mom".to_string(),
            error: Some("Failed to add todo".to_string()),
            loading: true,
        };
        let lines: Vec<_> = render(&state).lines().map(str::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Todo List",
                "> call mom",
                "Loading...",
                "error: Failed to add todo",
                "[x] 1  buy milk",
                "[ ] 2  walk dog",
            ]
        );
    }
}
