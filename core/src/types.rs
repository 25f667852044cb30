//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON schema but are defined independently
//! of the mock-server crate. Integration tests catch any schema drift between
//! the two.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Backend-assigned identifier of a todo.
///
/// The client never inspects it: whatever the server sends (any JSON number,
/// including u64 and fractional values, or a JSON string) is kept as-is and
/// echoed back into item paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Only text that prints back unchanged is a number; "007" stays text.
        match serde_json::from_str::<Number>(s) {
            Ok(n) if n.to_string() == s => Ok(TodoId::Number(n)),
            _ => Ok(TodoId::Text(s.to_string())),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n.into())
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
}

/// Request payload for creating a new todo. The server decides everything
/// else, including the initial completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_uses_camel_case_completion_flag() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"title":"buy milk","isCompleted":false}"#).unwrap();
        assert_eq!(todo.id, TodoId::from(1));
        assert_eq!(todo.title, "buy milk");
        assert!(!todo.is_completed);

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("is_completed").is_none());
    }

    #[test]
    fn string_ids_are_kept_verbatim() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"3f1c-aa","title":"walk dog","isCompleted":true}"#,
        )
        .unwrap();
        assert_eq!(todo.id, TodoId::Text("3f1c-aa".to_string()));
        assert_eq!(todo.id.to_string(), "3f1c-aa");
    }

    #[test]
    fn id_from_str_prefers_numbers() {
        assert_eq!("42".parse::<TodoId>().unwrap(), TodoId::from(42));
        assert_eq!(" 7 ".parse::<TodoId>().unwrap(), TodoId::from(7));
        assert_eq!(
            "abc".parse::<TodoId>().unwrap(),
            TodoId::Text("abc".to_string())
        );
    }

    #[test]
    fn id_from_str_keeps_non_canonical_numbers_as_typed() {
        for typed in ["007", "+5", "1e3", "-0"] {
            let id = typed.parse::<TodoId>().unwrap();
            assert_eq!(id, TodoId::Text(typed.to_string()), "{typed}");
            assert_eq!(id.to_string(), typed);
        }
        assert_eq!("1.5".parse::<TodoId>().unwrap().to_string(), "1.5");
        assert!(matches!("-3".parse::<TodoId>().unwrap(), TodoId::Number(_)));
    }

    #[test]
    fn numeric_ids_outside_i64_survive_a_round_trip() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":18446744073709551615,"title":"big","isCompleted":false}"#,
        )
        .unwrap();
        assert_eq!(todo.id.to_string(), "18446744073709551615");

        let todo: Todo =
            serde_json::from_str(r#"{"id":1.5,"title":"half","isCompleted":false}"#).unwrap();
        assert_eq!(todo.id.to_string(), "1.5");
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
