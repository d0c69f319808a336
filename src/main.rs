//! Podbotnik CLI entry point.

use anyhow::Result;
use clap::Parser;
use podbotnik::cli::{commands, Cli, Commands};
use podbotnik::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("podbotnik={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Ask {
            transcripts,
            question,
            num_sources,
            model,
        } => {
            commands::run_ask(transcripts, question, *num_sources, model.clone(), settings)
                .await?;
        }

        Commands::Chat { transcripts, model } => {
            commands::run_chat(transcripts.clone(), model.clone(), settings).await?;
        }

        Commands::Search {
            transcripts,
            query,
            limit,
        } => {
            commands::run_search(transcripts, query, *limit, settings).await?;
        }

        Commands::List { transcripts } => {
            commands::run_list(transcripts)?;
        }

        Commands::Serve {
            host,
            port,
            transcripts,
        } => {
            commands::run_serve(host, *port, transcripts.clone(), settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
