//! Tempconv: Interactive Temperature Conversion CLI
//!
//! Loads a scale table, then repeatedly asks for a source scale, a target
//! scale and a temperature until an invalid selection is entered.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use tempconv::cli::{Cli, Prompter, Session};
use tempconv::report::display_catalog;
use tempconv::scales::load_catalog;
use tempconv::utils::{create_spinner, finish_spinner, print_load_summary};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    // Load the catalog once; a missing or unreadable table is fatal
    let spinner = create_spinner("Loading temperature scales...");
    let loaded = load_catalog(&cli.scales, cli.parse_mode);
    finish_spinner(&spinner);
    let catalog = loaded
        .with_context(|| format!("Failed to load scale table: {}", cli.scales.display()))?;

    print_load_summary(&cli.scales, catalog.len());

    if cli.list {
        display_catalog(&catalog);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock(), cli.parse_mode);
    Session::new(&catalog, prompter).run()?;

    Ok(())
}
