use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use todo_core::TodoClient;
use tracing::trace;

use todo_cli::{shell, Action, Args, UreqTransport};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut client = TodoClient::new(&args.base_url, UreqTransport::new());
    client.subscribe(|state| {
        trace!(
            loading = state.loading,
            todos = state.todos.len(),
            error = ?state.error,
            "state changed"
        );
    });

    match args.command.unwrap_or(Action::Shell) {
        Action::Shell => {
            let stdin = io::stdin();
            shell::run(&mut client, stdin.lock(), io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Action::List => {
            client.refresh();
            one_shot(&client)
        }
        Action::Add { title } => {
            client.add(&title.join(" "));
            one_shot(&client)
        }
        Action::Toggle { id } => {
            client.toggle(&id);
            one_shot(&client)
        }
        Action::Delete { id } => {
            client.delete(&id);
            one_shot(&client)
        }
    }
}

/// Print the page; fail the process if it ended with an error banner.
fn one_shot(client: &TodoClient<UreqTransport>) -> Result<ExitCode> {
    let clean = shell::report(client.state(), io::stdout().lock())?;
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
