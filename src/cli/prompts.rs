//! Interactive prompts over plain line-based input
//!
//! Reader and writer are generic so the transcript can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::error::{InputError, SelectionError};
use crate::scales::parse::first_token;
use crate::scales::{Catalog, ParseMode, Scale};

/// A scale chosen by the user, with its catalog position
#[derive(Debug, Clone, Copy)]
pub struct Selected<'c> {
    pub index: usize,
    pub scale: &'c Scale,
}

/// Line-oriented prompt driver
pub struct Prompter<R, W> {
    input: R,
    output: W,
    mode: ParseMode,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, mode: ParseMode) -> Self {
        Self {
            input,
            output,
            mode,
        }
    }

    /// Writable handle for messages that are not prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// List the catalog under `label` and resolve the typed index.
    ///
    /// Entries equal to `excluded` are left out of the listing but keep
    /// their position: remaining entries are not renumbered and the hidden
    /// index can still be typed.
    pub fn select_scale<'c>(
        &mut self,
        catalog: &'c Catalog,
        label: &str,
        excluded: Option<&Scale>,
    ) -> Result<Selected<'c>, SelectionError> {
        write_scale_menu(&mut self.output, catalog, label, excluded)?;

        let token = self.read_token()?.ok_or(SelectionError::EndOfInput)?;
        let index = self
            .mode
            .parse_index(&token)
            .ok_or(SelectionError::Malformed { input: token })?;

        usize::try_from(index)
            .ok()
            .and_then(|i| catalog.get(i).map(|scale| Selected { index: i, scale }))
            .ok_or(SelectionError::OutOfRange { index })
    }

    /// Ask for a temperature expressed in `from`
    pub fn read_temperature(&mut self, from: &Scale) -> Result<f64, InputError> {
        writeln!(self.output, "Enter the temperature in {}", from.abbreviation)?;

        let token = self.read_token()?.ok_or(InputError::EndOfInput)?;
        self.mode
            .parse_number(&token)
            .ok_or(InputError::Malformed { input: token })
    }

    /// Read one line and keep its first token. `None` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(first_token(&line).to_string()))
    }
}

/// Write the selection header and one `{index}: {name} (º{abbreviation})` line per entry
pub fn write_scale_menu<W: Write>(
    output: &mut W,
    catalog: &Catalog,
    label: &str,
    excluded: Option<&Scale>,
) -> io::Result<()> {
    writeln!(output, "{} : Select a temperature scale", label)?;
    for (i, scale) in catalog.iter().enumerate() {
        if excluded == Some(scale) {
            continue;
        }
        writeln!(output, "{}: {} (º{})", i, scale.name, scale.abbreviation)?;
    }
    Ok(())
}
