//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! hokusai binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::handle_command;
