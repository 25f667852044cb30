//! Terminal front end for `todo-core`.
//!
//! `UreqTransport` executes the core's plain-data requests; `shell` renders
//! the page after every command the user types.

pub mod args;
pub mod command;
pub mod shell;
pub mod transport;

pub use args::{Action, Args};
pub use command::{Command, ParseCommandError};
pub use transport::UreqTransport;
