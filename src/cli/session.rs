//! The select / select / convert loop
//!
//! Each iteration picks a source scale, then a target scale with the source
//! hidden from the listing, then reads a temperature and prints the result.
//! Choosing the same catalog position twice restarts without converting.
//! An invalid selection ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::prompts::Prompter;
use crate::error::{InputError, SelectionError};
use crate::scales::{convert, Catalog};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// An out-of-range (or, in strict mode, non-numeric) index was entered
    InvalidSelection,
    /// Standard input was closed
    EndOfInput,
}

/// Outcome of a single iteration
#[derive(Debug, Clone, PartialEq)]
pub enum Iteration {
    Converted { from: usize, to: usize, value: f64 },
    SameScale,
    /// Strict mode rejected the typed temperature
    InvalidTemperature,
    Finished(SessionEnd),
}

pub struct Session<'c, R, W> {
    catalog: &'c Catalog,
    prompter: Prompter<R, W>,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(catalog: &'c Catalog, prompter: Prompter<R, W>) -> Self {
        Self { catalog, prompter }
    }

    /// Run iterations until the session finishes
    pub fn run(&mut self) -> Result<SessionEnd> {
        let mut conversions = 0usize;
        loop {
            match self.step()? {
                Iteration::Finished(end) => {
                    log::info!("Session ended ({:?}) after {} conversion(s)", end, conversions);
                    return Ok(end);
                }
                Iteration::Converted { .. } => conversions += 1,
                Iteration::SameScale | Iteration::InvalidTemperature => {}
            }
        }
    }

    /// Run one select / select / convert cycle
    pub fn step(&mut self) -> Result<Iteration> {
        let from = match self.prompter.select_scale(self.catalog, "From", None) {
            Ok(selected) => selected,
            Err(err) => return self.selection_failed(err),
        };

        let to = match self
            .prompter
            .select_scale(self.catalog, "To", Some(from.scale))
        {
            Ok(selected) => selected,
            Err(err) => return self.selection_failed(err),
        };

        let out = self.prompter.output();
        if from.index == to.index {
            writeln!(out, "The scales are the same\n")?;
            return Ok(Iteration::SameScale);
        }

        writeln!(
            out,
            "Converting from {} to {}\n",
            from.scale.name, to.scale.name
        )?;

        let temperature = match self.prompter.read_temperature(from.scale) {
            Ok(t) => t,
            Err(InputError::Malformed { input }) => {
                log::debug!("Rejected temperature {:?}", input);
                writeln!(self.prompter.output(), "Invalid temperature\n")?;
                return Ok(Iteration::InvalidTemperature);
            }
            Err(InputError::EndOfInput) => return Ok(Iteration::Finished(SessionEnd::EndOfInput)),
            Err(err) => return Err(err.into()),
        };

        let value = convert(from.scale, to.scale, temperature);
        writeln!(
            self.prompter.output(),
            "The converted temperature is: {}\n",
            format_temperature(value)
        )?;

        Ok(Iteration::Converted {
            from: from.index,
            to: to.index,
            value,
        })
    }

    fn selection_failed(&mut self, err: SelectionError) -> Result<Iteration> {
        match err {
            SelectionError::OutOfRange { .. } | SelectionError::Malformed { .. } => {
                log::debug!("Selection rejected: {:?}", err);
                writeln!(self.prompter.output(), "{}", err)?;
                Ok(Iteration::Finished(SessionEnd::InvalidSelection))
            }
            SelectionError::EndOfInput => Ok(Iteration::Finished(SessionEnd::EndOfInput)),
            SelectionError::Io(err) => Err(err.into()),
        }
    }
}

/// Two decimal places; non-finite values print as `+Inf`, `-Inf` or `NaN`
pub fn format_temperature(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{:.2}", value)
    }
}
