//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::scales::ParseMode;

/// Tempconv - Convert temperatures between the scales listed in a CSV table
#[derive(Parser, Debug)]
#[command(name = "tempconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scale table path. The header row is skipped; every other row holds
    /// one `name;abbreviation;melting;boiling` cell.
    #[arg(short, long, default_value = "scales.csv")]
    pub scales: PathBuf,

    /// How unparseable numbers are handled.
    /// Options: "lenient" (treat as 0, default) or "strict" (reject)
    #[arg(long, default_value = "lenient", value_parser = validate_parse_mode)]
    pub parse_mode: ParseMode,

    /// Print the loaded scale table and exit
    #[arg(long, default_value = "false")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter derived from the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Validator for parse_mode parameter
fn validate_parse_mode(s: &str) -> Result<ParseMode, String> {
    s.parse()
}
