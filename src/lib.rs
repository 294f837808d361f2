//! Tempconv: Temperature Scale Conversion Library
//!
//! Loads a table of linear temperature scales and converts values between
//! them by interpolating across each scale's melting and boiling points.

pub mod cli;
pub mod error;
pub mod report;
pub mod scales;
pub mod utils;
