use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

/// In-memory stand-in for the todo backend.
#[derive(Parser, Debug)]
#[command(name = "mock-server")]
#[command(about = "In-memory todo API serving /api/todo")]
struct Config {
    /// Listen address
    #[arg(short, long, env = "MOCK_SERVER_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Log level, used when RUST_LOG is unset
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    mock_server::run(listener).await?;
    Ok(())
}
