//! Interactive loop: read a command, run it, print the page again.

use std::io::{self, BufRead, Write};

use todo_core::{view, ClientState, TodoClient, Transport};
use tracing::debug;

use crate::command::{Command, HELP};

const PROMPT: &str = "todo> ";

/// Mount the client, then serve commands from `input` until EOF or `quit`.
pub fn run<T, R, W>(client: &mut TodoClient<T>, mut input: R, mut output: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    client.mount();
    write!(output, "{}", view::render(client.state()))?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(command) => {
                debug!(?command, "running command");
                apply(client, command);
                write!(output, "{}", view::render(client.state()))?;
            }
            Err(err) => writeln!(output, "{err}; type 'help' for commands")?,
        }
    }
    output.flush()
}

/// Dispatch one state-changing command to the client.
pub fn apply<T: Transport>(client: &mut TodoClient<T>, command: Command) {
    match command {
        Command::Refresh => client.refresh(),
        Command::Add(title) => client.add(&title),
        Command::Draft(text) => client.set_draft(text),
        Command::Submit => client.submit_draft(),
        Command::Toggle(id) => client.toggle(&id),
        Command::Delete(id) => client.delete(&id),
        Command::Help | Command::Quit => {}
    }
}

/// Print the page once for a one-shot subcommand. Returns `false` when the
/// page ends with an error banner, which the binary turns into a failing exit.
pub fn report<W: Write>(state: &ClientState, mut output: W) -> io::Result<bool> {
    write!(output, "{}", view::render(state))?;
    output.flush()?;
    Ok(state.error.is_none())
}
