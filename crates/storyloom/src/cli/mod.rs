//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! storyloom binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, GenerateArgs};
pub use run::{list_catalog, run_generate, run_health};
