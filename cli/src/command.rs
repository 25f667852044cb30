//! Line commands accepted by the interactive shell.

use std::str::FromStr;

use thiserror::Error;
use todo_core::TodoId;

pub const HELP: &str = "\
commands:
  list | refresh       fetch the list again
  add <title>          add a todo
  draft <text>         set the draft title
  submit               add the draft title
  toggle <id>          flip a todo's completion
  delete | rm <id>     remove a todo
  help                 show this text
  quit | exit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    /// Title as typed; blank titles are rejected by the client, not here.
    Add(String),
    Draft(String),
    Submit,
    Toggle(TodoId),
    Delete(TodoId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an id")]
    MissingId(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let id = |name: &'static str| -> Result<TodoId, ParseCommandError> {
            if rest.is_empty() {
                return Err(ParseCommandError::MissingId(name));
            }
            Ok(TodoId::from_str(rest).unwrap_or_else(|never| match never {}))
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "list" | "ls" | "refresh" => Ok(Command::Refresh),
            "add" => Ok(Command::Add(rest.to_string())),
            "draft" => Ok(Command::Draft(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "toggle" => id("toggle").map(Command::Toggle),
            "delete" | "rm" => id("delete").map(Command::Delete),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
