//! yt-study CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yt_study::cli::{commands, Cli, Commands, Output};
use yt_study::config::Settings;
use yt_study::service::StudyTask;

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        Output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize logging. The server logs at info by default.
    let log_level = match (cli.verbose, &cli.command) {
        (0, Commands::Serve { .. }) => "info",
        (0, _) => "warn",
        (1, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            format!("yt_study={},tower_http={}", log_level, log_level)
        })))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&Settings::expand_path(path)))?,
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Serve { host, port } => {
            commands::run_serve(host, port, settings).await?;
        }

        Commands::Summarize { url, backend } => {
            commands::run_study(StudyTask::Summary, &url, backend, settings).await?;
        }

        Commands::Quiz { url, backend } => {
            commands::run_study(StudyTask::Quiz, &url, backend, settings).await?;
        }

        Commands::Status { backend } => {
            commands::run_status(backend, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings)?;
        }
    }

    Ok(())
}
