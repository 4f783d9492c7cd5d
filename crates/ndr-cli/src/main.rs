mod cli;
mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use ndr_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Redact {
            sources,
            names,
            name_list,
            output,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::redact::handle(&config, sources, names, name_list, output, json).await
        }
        cli::Commands::Summary { file, json } => commands::summary::handle(&file, json).await,
        cli::Commands::Verify { source, redacted } => {
            let config = load_config(cli.config.as_deref())?;
            commands::verify::handle(&config, &source, &redacted).await
        }
        cli::Commands::Init { force } => commands::init::handle(cli.config.as_deref(), force),
        cli::Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
