//! CLI command definitions.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Delulu - interactive story backend
#[derive(Parser, Debug)]
#[command(name = "delulu")]
#[command(about = "Interactive story backend with generated scene images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Interface to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding configuration
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate one story segment and print it as JSON
    #[command(group(ArgGroup::new("input").required(true).args(["prompt", "context"])))]
    Story {
        /// Free-form prompt
        #[arg(long)]
        prompt: Option<String>,

        /// JSON file holding a story context (characters, story_config, ...)
        #[arg(long)]
        context: Option<PathBuf>,
    },

    /// Look up a character by name or photo and print it as JSON
    #[command(group(ArgGroup::new("subject").required(true).args(["name", "image"])))]
    Character {
        /// Name of a real person or known fictional character
        #[arg(long)]
        name: Option<String>,

        /// Path to a photo
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Print the cache key derived from a scene description
    CacheKey {
        /// Location description
        description: String,
    },
}
