//! CLI module - argument parsing, interactive prompts and the conversion loop

mod args;
pub mod prompts;
pub mod session;

pub use args::Cli;
pub use prompts::*;
pub use session::*;
