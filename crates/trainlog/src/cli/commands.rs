//! CLI command definitions.
//!
//! This module defines the arguments of every `trains` subcommand.

use std::path::PathBuf;

use clap::Args;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Train list file (created if missing)
    pub filename: PathBuf,

    /// The number of a train
    #[arg(short = 'n', long = "number", value_name = "NUM", allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Destination point
    #[arg(short = 'd', long)]
    pub destination: Option<String>,

    /// Departure time
    #[arg(short = 's', long = "start_time", visible_alias = "start-time", value_name = "TIME")]
    pub start_time: Option<String>,
}

/// Display command arguments.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    /// Train list file
    pub filename: PathBuf,
}

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// Train list file
    pub filename: PathBuf,

    /// The required destination
    #[arg(short = 'D', long)]
    pub destination: Option<String>,

    /// Print the matching trains as a table
    #[arg(long)]
    pub show: bool,
}
