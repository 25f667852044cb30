use clap::{Parser, Subcommand};
use todo_core::{TodoId, DEFAULT_BASE_URL};

/// Terminal client for the todo API
#[derive(Parser, Debug, Clone)]
#[command(name = "todo")]
#[command(about = "List, add, toggle and delete todos on a remote API")]
pub struct Args {
    /// Collection endpoint of the todo API
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log level, used when RUST_LOG is unset
    #[arg(short, long, env = "TODO_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Action>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the current list
    List,
    /// Add a todo; words are joined with spaces
    Add { title: Vec<String> },
    /// Flip a todo's completion flag
    Toggle { id: TodoId },
    /// Remove a todo
    Delete { id: TodoId },
    /// Interactive mode (default)
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_shell_against_localhost() {
        let args = Args::try_parse_from(["todo"]).unwrap();
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert!(args.command.is_none());
    }

    #[test]
    fn add_collects_words() {
        let args = Args::try_parse_from(["todo", "add", "buy", "milk"]).unwrap();
        assert_eq!(
            args.command,
            Some(Action::Add {
                title: vec!["buy".to_string(), "milk".to_string()]
            })
        );
    }

    #[test]
    fn ids_and_base_url_parse() {
        let args = Args::try_parse_from([
            "todo",
            "--base-url",
            "http://example.test/api/todo",
            "toggle",
            "7",
        ])
        .unwrap();
        assert_eq!(args.base_url, "http://example.test/api/todo");
        assert_eq!(args.command, Some(Action::Toggle { id: TodoId::from(7) }));
    }
}
