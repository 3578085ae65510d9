//! Command-line interface module.

mod character;
mod commands;
mod serve;
mod story;

pub use character::run_character;
pub use commands::{Cli, Commands};
pub use serve::run_server;
pub use story::run_story;

use delulu::{DeluluResult, JsonError, Payload};
use serde::Serialize;

/// Print a `{"response": ...}` payload as pretty JSON on stdout.
fn print_payload<T: Serialize>(payload: &Payload<T>) -> DeluluResult<()> {
    let json = serde_json::to_string_pretty(payload)
        .map_err(|e| JsonError::new(format!("Failed to serialize response: {}", e)))?;
    println!("{}", json);
    Ok(())
}
