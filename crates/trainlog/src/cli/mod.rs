//! Command-line interface for trainlog.
//!
//! This module provides the CLI structure for the `trains` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, DisplayCommand, SelectCommand};

/// trains - Keep a list of train departures in a JSON file
///
/// Every command reads the whole file, checks it against the JSON Schema
/// and, for `add`, writes it back sorted by departure time.
#[derive(Debug, Parser)]
#[command(name = "trains")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON Schema the train list must satisfy (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a train to the list
    Add(AddCommand),

    /// Print the list of trains as a table
    Display(DisplayCommand),

    /// Find the trains going to a destination
    Select(SelectCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
