//! `trains` - CLI for trainlog
//!
//! This binary adds, lists and filters train departures kept in a JSON file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use trainlog::cli::{AddCommand, Cli, Command, DisplayCommand, SelectCommand};
use trainlog::{init_logging, App, Config, Prompter, Train};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration; --schema wins over every other source
    let config = Config::load_from(cli.config.clone())
        .context("loading configuration")?
        .with_schema_path(cli.schema.clone());
    let app = App::new(config);

    match cli.command {
        Command::Add(cmd) => handle_add(&app, cmd),
        Command::Display(cmd) => handle_display(&app, &cmd),
        Command::Select(cmd) => handle_select(&app, cmd),
    }
}

fn handle_add(app: &App, cmd: AddCommand) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    let num = prompter.integer_or(cmd.number, "Number")?;
    let destination = prompter.text_or(cmd.destination, "Destination")?;
    let start_time = prompter.text_or(cmd.start_time, "Start time")?;

    let mut stdout = std::io::stdout().lock();
    app.add(
        &cmd.filename,
        Train::new(num, destination, start_time),
        &mut stdout,
    )
    .with_context(|| format!("adding train to {}", cmd.filename.display()))?;
    Ok(())
}

fn handle_display(app: &App, cmd: &DisplayCommand) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    app.display(&cmd.filename, &mut rand::thread_rng(), &mut stdout)
        .with_context(|| format!("displaying {}", cmd.filename.display()))?;
    stdout.flush()?;
    Ok(())
}

fn handle_select(app: &App, cmd: SelectCommand) -> anyhow::Result<()> {
    let destination = Prompter::stdio().text_or(cmd.destination, "Destination")?;

    let mut stdout = std::io::stdout().lock();
    // Without --show the result is computed but not printed.
    let selected = if cmd.show {
        app.select_shown(
            &cmd.filename,
            &destination,
            &mut rand::thread_rng(),
            &mut stdout,
        )
    } else {
        app.select(&cmd.filename, &destination, &mut stdout)
    }
    .with_context(|| format!("selecting from {}", cmd.filename.display()))?;
    tracing::debug!("{} trains selected", selected.len());
    stdout.flush()?;
    Ok(())
}
