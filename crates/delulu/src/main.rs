//! Delulu CLI binary.
//!
//! - `serve` runs the HTTP backend
//! - `story` and `character` run one generation and print the JSON payload
//! - `cache-key` prints the key a scene description is cached under

use clap::Parser;
use delulu::{DeluluConfig, ObservabilityConfig, derive_key, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_character, run_server, run_story};

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new("delulu").with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    let _guard = init_observability(&observability)?;

    if let Commands::CacheKey { description } = &cli.command {
        println!("{}", derive_key(description));
        return Ok(());
    }

    let config = DeluluConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => run_server(config, host, port).await?,
        Commands::Story { prompt, context } => {
            run_story(&config, prompt, context.as_deref()).await?
        }
        Commands::Character { name, image } => {
            run_character(&config, name, image.as_deref()).await?
        }
        Commands::CacheKey { .. } => {}
    }

    Ok(())
}
