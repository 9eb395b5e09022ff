//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hokusai - turn authored notes into published posts with generated images
#[derive(Parser, Debug)]
#[command(name = "hokusai")]
#[command(about = "Turn authored notes into published posts with generated images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory of note documents
    #[arg(long, global = true, default_value = "data/notes")]
    pub notes_dir: PathBuf,

    /// Usage ledger file
    #[arg(long, global = true, default_value = "data/usage_log.json")]
    pub ledger: PathBuf,

    /// Root directory for prompt manifests and generated images
    #[arg(long, global = true, default_value = "output")]
    pub output: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the next unused note id
    Select,

    /// Compile image prompts for a note into its manifest
    Prompts {
        /// Note id (3 digits)
        #[arg(long)]
        note_id: String,
    },

    /// Generate images from a note's compiled manifest
    Images {
        /// Note id (3 digits)
        #[arg(long)]
        note_id: String,

        /// Image backend to drive
        #[arg(long, default_value = "allapi")]
        backend: String,
    },

    /// Publish a note's text and images to the hosted table
    Publish {
        /// Note id (3 digits)
        #[arg(long)]
        note_id: String,
    },

    /// Mark a note as used in the ledger
    Mark {
        /// Note id (3 digits)
        #[arg(long)]
        note_id: String,
    },

    /// Run the full pipeline for the next unused note
    Run {
        /// Image backend to drive
        #[arg(long, default_value = "allapi")]
        backend: String,

        /// Generate images but skip the hosted-table upload
        #[arg(long)]
        skip_publish: bool,
    },
}
