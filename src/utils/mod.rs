//! Utility module - spinners and terminal styling

pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
