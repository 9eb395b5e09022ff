//! Hokusai CLI binary.
//!
//! Each pipeline stage is invocable standalone:
//! - Select the next unused note
//! - Compile image prompts for a note
//! - Generate images from a compiled manifest
//! - Publish text and images to the hosted table
//! - Mark a note as used
//!
//! `run` chains every stage for the next unused note.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{handle_command, Cli};

    // Load .env before reading any provider credentials
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    handle_command(cli).await
}
