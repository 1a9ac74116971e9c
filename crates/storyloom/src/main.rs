//! Storyloom CLI binary.
//!
//! This binary provides command-line access to Storyloom's functionality:
//! - Generate a complete illustrated storybook from a request
//! - Probe the text backend's health
//! - List the seeded storybook catalog

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_catalog, run_generate, run_health};

    // Backend credentials may live in a local .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Health => {
            run_health().await?;
        }

        Commands::Catalog => {
            list_catalog()?;
        }
    }

    Ok(())
}
